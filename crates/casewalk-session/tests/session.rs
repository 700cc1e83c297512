//! End-to-end session tests against a recording mock scene.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use casewalk_model::{DatasetLayout, NnUnetSplit, ScanConfig};
use casewalk_session::{BrowserSession, HostScene, SessionError};
use tempfile::TempDir;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("load refused: {0}")]
struct SceneError(String);

/// Records every scene call; paths listed in `refuse` fail to load.
#[derive(Default)]
struct MockScene {
    clears: usize,
    volumes: Vec<PathBuf>,
    segmentations: Vec<PathBuf>,
    refuse: BTreeSet<PathBuf>,
}

impl HostScene for MockScene {
    type VolumeHandle = PathBuf;
    type SegmentationHandle = PathBuf;
    type Error = SceneError;

    fn clear_scene(&mut self) {
        self.clears += 1;
        self.volumes.clear();
        self.segmentations.clear();
    }

    fn load_volume(&mut self, path: &Path) -> Result<PathBuf, SceneError> {
        if self.refuse.contains(path) {
            return Err(SceneError(path.display().to_string()));
        }
        self.volumes.push(path.to_path_buf());
        Ok(path.to_path_buf())
    }

    fn load_segmentation(&mut self, path: &Path) -> Result<PathBuf, SceneError> {
        if self.refuse.contains(path) {
            return Err(SceneError(path.display().to_string()));
        }
        self.segmentations.push(path.to_path_buf());
        Ok(path.to_path_buf())
    }
}

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"nifti").expect("write file");
    path
}

/// nnU-Net train tree with cases 001..=003, two images each.
fn nnunet_tree() -> TempDir {
    let root = TempDir::new().expect("create temp dir");
    let images = root.path().join("imagesTr");
    let labels = root.path().join("labelsTr");
    fs::create_dir_all(&images).expect("create imagesTr");
    fs::create_dir_all(&labels).expect("create labelsTr");
    for id in ["001", "002", "003"] {
        touch(&labels, &format!("{id}.nii.gz"));
        touch(&images, &format!("{id}_0000.nii.gz"));
        touch(&images, &format!("{id}_0001.nii.gz"));
    }
    root
}

#[test]
fn search_then_load_walks_the_dataset() {
    let root = nnunet_tree();
    let mut session = BrowserSession::new(ScanConfig::nnunet(root.path(), NnUnetSplit::Train));
    let mut scene = MockScene::default();

    session.search().expect("search succeeds");
    assert_eq!(session.index().len(), 3);
    assert_eq!(session.current_case_id(), Some("001"));

    let report = session.load_current(&mut scene).expect("load succeeds");
    assert_eq!(report.case_id, "001");
    assert_eq!(report.volumes.len(), 2);
    assert!(report.segmentation.is_some());
    assert!(report.failures.is_empty());
    assert_eq!(scene.clears, 1);
    assert_eq!(scene.volumes.len(), 2);
    assert_eq!(scene.segmentations.len(), 1);
}

#[test]
fn next_and_previous_clamp_and_reload() {
    let root = nnunet_tree();
    let mut session = BrowserSession::new(ScanConfig::nnunet(root.path(), NnUnetSplit::Train));
    let mut scene = MockScene::default();
    session.search().expect("search succeeds");

    // Past the end: stays on the last case, but still reloads it.
    for _ in 0..5 {
        session.load_next(&mut scene).expect("load next");
    }
    assert_eq!(session.current_case_id(), Some("003"));

    // Back past the start.
    for _ in 0..5 {
        session.load_previous(&mut scene).expect("load previous");
    }
    assert_eq!(session.current_case_id(), Some("001"));

    // One clear per load call.
    assert_eq!(scene.clears, 10);
}

#[test]
fn select_jumps_without_loading() {
    let root = nnunet_tree();
    let mut session = BrowserSession::new(ScanConfig::nnunet(root.path(), NnUnetSplit::Train));
    session.search().expect("search succeeds");

    assert!(session.select("002"));
    assert_eq!(session.current_case_id(), Some("002"));

    // Unknown id leaves the cursor alone.
    assert!(!session.select("404"));
    assert_eq!(session.current_case_id(), Some("002"));
}

#[test]
fn one_failed_volume_does_not_stop_the_rest() {
    let root = nnunet_tree();
    let mut session = BrowserSession::new(ScanConfig::nnunet(root.path(), NnUnetSplit::Train));
    let mut scene = MockScene::default();
    session.search().expect("search succeeds");

    let bad = root.path().join("imagesTr").join("001_0000.nii.gz");
    scene.refuse.insert(bad.clone());

    let report = session.load_current(&mut scene).expect("load succeeds");
    assert_eq!(report.volumes.len(), 1);
    assert!(report.segmentation.is_some());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, bad);
}

#[test]
fn failed_label_is_reported_alongside_loaded_volumes() {
    let root = nnunet_tree();
    let mut session = BrowserSession::new(ScanConfig::nnunet(root.path(), NnUnetSplit::Train));
    let mut scene = MockScene::default();
    session.search().expect("search succeeds");

    let bad = root.path().join("labelsTr").join("001.nii.gz");
    scene.refuse.insert(bad.clone());

    let report = session.load_current(&mut scene).expect("load succeeds");
    assert_eq!(report.volumes.len(), 2);
    assert!(report.segmentation.is_none());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, bad);
}

#[test]
fn load_report_is_debug_formattable() {
    // Debug must come from the scene's handle types, not the scene itself;
    // `MockScene` is not Debug.
    let root = nnunet_tree();
    let mut session = BrowserSession::new(ScanConfig::nnunet(root.path(), NnUnetSplit::Train));
    let mut scene = MockScene::default();
    session.search().expect("search succeeds");

    let report = session.load_current(&mut scene).expect("load succeeds");
    let rendered = format!("{report:?}");
    assert!(rendered.contains("001"));
}

#[test]
fn load_with_empty_index_reports_nothing_selected() {
    let mut session = BrowserSession::default();
    let mut scene = MockScene::default();

    let err = session.load_current(&mut scene).unwrap_err();
    assert!(matches!(err, SessionError::NothingSelected));
    // The scene was not cleared for a load that never happened.
    assert_eq!(scene.clears, 0);
}

#[test]
fn blank_images_root_search_is_a_silent_no_op() {
    let mut session = BrowserSession::default();
    session.search().expect("blank root is not an error");
    assert!(session.index().is_empty());
}

#[test]
fn search_failure_keeps_an_empty_index() {
    let mut session = BrowserSession::new(ScanConfig::nnunet(
        "/definitely/not/there",
        NnUnetSplit::Train,
    ));

    assert!(session.search().is_err());
    assert!(session.index().is_empty());
    assert!(session.current_case_id().is_none());
}

#[test]
fn mode_change_clears_scene_and_index() {
    let root = nnunet_tree();
    let mut session = BrowserSession::new(ScanConfig::nnunet(root.path(), NnUnetSplit::Train));
    let mut scene = MockScene::default();
    session.search().expect("search succeeds");
    session.load_current(&mut scene).expect("load succeeds");

    session.set_mode(&mut scene, DatasetLayout::Paired);
    assert_eq!(scene.clears, 2);
    assert!(scene.volumes.is_empty());
    assert!(session.index().is_empty());
    assert_eq!(session.current_case_id(), None);
}

#[test]
fn patient_mode_without_label_loads_volumes_only() {
    let root = TempDir::new().expect("create temp dir");
    let case = root.path().join("caseA");
    fs::create_dir_all(&case).expect("create case dir");
    touch(&case, "img_0.nii.gz");

    let mut session = BrowserSession::new(ScanConfig::patient(
        root.path(),
        r"^img_\d+\.nii\.gz$",
        r"^seg\.nii\.gz$",
    ));
    let mut scene = MockScene::default();
    session.search().expect("search succeeds");

    let report = session.load_current(&mut scene).expect("load succeeds");
    assert_eq!(report.volumes.len(), 1);
    assert!(report.segmentation.is_none());
    assert!(report.failures.is_empty());
}
