//! Command handlers tying configuration, discovery, and navigation together.

use std::path::PathBuf;

use casewalk_index::build_index;
use casewalk_model::{CaseIndex, DatasetLayout, NnUnetSplit, ScanConfig};

use crate::cursor::NavigationCursor;
use crate::error::Result;
use crate::host::HostScene;

/// A single volume or segmentation that failed to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub path: PathBuf,
    /// Host error rendered for display.
    pub message: String,
}

/// What a load command managed to put into the scene.
///
/// Failures sit alongside the handles: one bad file never aborts its
/// siblings.
pub struct CaseLoadReport<S: HostScene> {
    pub case_id: String,
    pub volumes: Vec<S::VolumeHandle>,
    pub segmentation: Option<S::SegmentationHandle>,
    pub failures: Vec<LoadFailure>,
}

impl<S: HostScene> CaseLoadReport<S> {
    fn new(case_id: String) -> Self {
        Self {
            case_id,
            volumes: Vec::new(),
            segmentation: None,
            failures: Vec::new(),
        }
    }
}

// Manual impl: a derive would bound `S: Debug` instead of the handle types.
impl<S: HostScene> std::fmt::Debug for CaseLoadReport<S>
where
    S::VolumeHandle: std::fmt::Debug,
    S::SegmentationHandle: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseLoadReport")
            .field("case_id", &self.case_id)
            .field("volumes", &self.volumes)
            .field("segmentation", &self.segmentation)
            .field("failures", &self.failures)
            .finish()
    }
}

/// Browser state: the configuration surface, the current case index, and the
/// navigation cursor.
///
/// The handlers map the host's UI events one-to-one (directory chosen, mode
/// changed, search, load, next, previous) and own all mutable state, so
/// nothing hides inside UI widgets. Any change to a root directory, the
/// layout mode, or the patterns discards the index wholesale; it is only
/// repopulated by [`BrowserSession::search`].
#[derive(Debug, Default)]
pub struct BrowserSession {
    config: ScanConfig,
    index: CaseIndex,
    cursor: NavigationCursor,
}

impl BrowserSession {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            index: CaseIndex::new(),
            cursor: NavigationCursor::new(),
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn index(&self) -> &CaseIndex {
        &self.index
    }

    /// Case id under the cursor, if any.
    pub fn current_case_id(&self) -> Option<&str> {
        self.cursor
            .current(&self.index)
            .ok()
            .map(|entry| entry.case_id.as_str())
    }

    // === Configuration handlers ===

    /// Switches the dataset layout. Clears the host scene and discards the
    /// index, mirroring a mode-change event in the viewer.
    pub fn set_mode<S: HostScene>(&mut self, scene: &mut S, mode: DatasetLayout) {
        scene.clear_scene();
        self.config.mode = mode;
        self.discard_index();
    }

    pub fn set_nnunet_submode(&mut self, submode: NnUnetSplit) {
        self.config.nnunet_submode = submode;
        self.discard_index();
    }

    pub fn set_images_root(&mut self, root: impl Into<PathBuf>) {
        self.config.images_root = root.into();
        self.discard_index();
    }

    pub fn set_labels_root(&mut self, root: impl Into<PathBuf>) {
        self.config.labels_root = Some(root.into());
        self.discard_index();
    }

    pub fn set_patterns(&mut self, image: impl Into<String>, label: impl Into<String>) {
        self.config.image_pattern = image.into();
        self.config.label_pattern = label.into();
        self.discard_index();
    }

    // === Search ===

    /// Rebuilds the index from the current configuration.
    ///
    /// Fails softly: a filesystem error keeps whatever was discovered before
    /// the failure and returns the error for display. A blank images root
    /// (or blank labels root in paired mode) is a silent no-op that leaves
    /// the index empty.
    pub fn search(&mut self) -> Result<()> {
        tracing::debug!("searching directory");
        self.discard_index();

        if self.config.images_root.as_os_str().is_empty() {
            return Ok(());
        }
        if self.config.mode == DatasetLayout::Paired
            && self
                .config
                .labels_root
                .as_ref()
                .is_none_or(|root| root.as_os_str().is_empty())
        {
            return Ok(());
        }

        let outcome = build_index(&self.config);
        self.index = outcome.index;
        match outcome.error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    // === Navigation and loading ===

    /// Moves the cursor to `case_id` without loading anything. Unknown ids
    /// are ignored.
    pub fn select(&mut self, case_id: &str) -> bool {
        self.cursor.select(&self.index, case_id)
    }

    /// Clears the scene, then loads every image of the current case followed
    /// by its label. Per-file failures land in the report and do not stop
    /// the remaining loads.
    pub fn load_current<S: HostScene>(&self, scene: &mut S) -> Result<CaseLoadReport<S>> {
        let entry = self.cursor.current(&self.index)?;
        scene.clear_scene();
        tracing::debug!(case_id = entry.case_id.as_str(), "loading case");

        let mut report = CaseLoadReport::new(entry.case_id.clone());
        for image in &entry.images {
            match scene.load_volume(image) {
                Ok(handle) => report.volumes.push(handle),
                Err(err) => {
                    tracing::error!(path = %image.display(), %err, "failed to load image");
                    report.failures.push(LoadFailure {
                        path: image.clone(),
                        message: err.to_string(),
                    });
                }
            }
        }

        match &entry.label {
            Some(label) => match scene.load_segmentation(label) {
                Ok(handle) => report.segmentation = Some(handle),
                Err(err) => {
                    tracing::error!(path = %label.display(), %err, "failed to load label");
                    report.failures.push(LoadFailure {
                        path: label.clone(),
                        message: err.to_string(),
                    });
                }
            },
            None => tracing::info!(case_id = entry.case_id.as_str(), "no label for case"),
        }

        Ok(report)
    }

    /// Advances the cursor (clamped at the end) and loads that case.
    pub fn load_next<S: HostScene>(&mut self, scene: &mut S) -> Result<CaseLoadReport<S>> {
        self.cursor.next(&self.index);
        self.load_current(scene)
    }

    /// Retreats the cursor (clamped at the start) and loads that case.
    pub fn load_previous<S: HostScene>(&mut self, scene: &mut S) -> Result<CaseLoadReport<S>> {
        self.cursor.previous();
        self.load_current(scene)
    }

    fn discard_index(&mut self) {
        self.index = CaseIndex::new();
        self.cursor.reset();
    }
}
