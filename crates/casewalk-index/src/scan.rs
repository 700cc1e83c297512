//! Case discovery for the three supported dataset layouts.

use std::path::{Path, PathBuf};

use casewalk_model::{CaseEntry, CaseIndex, DatasetLayout, ScanConfig};

use crate::error::{IndexError, Result};
use crate::patterns::FilenamePattern;

/// Result of a scan: the index built so far, plus the error that stopped it
/// if any.
///
/// Configuration errors leave the index empty. A filesystem error partway
/// through a scan keeps the cases discovered up to that point.
#[derive(Debug)]
pub struct ScanOutcome {
    pub index: CaseIndex,
    pub error: Option<IndexError>,
}

impl ScanOutcome {
    /// Converts to a `Result`, discarding any partially built index on error.
    pub fn into_result(self) -> Result<CaseIndex> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.index),
        }
    }
}

/// Builds a fresh case index for the layout selected in `config`.
///
/// Fails softly: every error is reported in the outcome rather than
/// propagated, and the host process is never aborted. Each invocation starts
/// from an empty index; the produced case-id order is lexicographic and does
/// not depend on filesystem enumeration order.
pub fn build_index(config: &ScanConfig) -> ScanOutcome {
    let mut index = CaseIndex::new();
    let error = match config.mode {
        DatasetLayout::NnUnet => scan_nnunet(config, &mut index).err(),
        DatasetLayout::Patient => scan_patient(config, &mut index).err(),
        DatasetLayout::Paired => scan_paired(config, &mut index).err(),
    };

    match &error {
        Some(err) => tracing::error!(%err, "failed to navigate input directory"),
        None => tracing::info!(count = index.len(), "added cases"),
    }

    ScanOutcome { index, error }
}

/// nnU-Net layout: `images{Tr,Ts}` and `labels{Tr,Ts}` under one root.
///
/// Every label directory entry is considered (no dotfile or file-type
/// filtering, matching the convention's flat directories); a case is kept
/// only when at least one image name starts with its case id.
fn scan_nnunet(config: &ScanConfig, index: &mut CaseIndex) -> Result<()> {
    let suffix = config.nnunet_submode.dir_suffix();
    let images_dir = config.images_root.join(format!("images{suffix}"));
    let labels_dir = config.images_root.join(format!("labels{suffix}"));

    let labels = read_entries(&labels_dir)?;
    if labels.is_empty() {
        return Ok(());
    }
    let image_entries = read_entries(&images_dir)?;

    for label in labels {
        let Some(label_name) = file_name(&label) else {
            continue;
        };
        let case_id = case_id_from(label_name).to_string();
        tracing::debug!(%case_id, "looking for images");

        let images: Vec<PathBuf> = image_entries
            .iter()
            .filter(|path| {
                file_name(path).is_some_and(|name| prefix_glob_matches(&case_id, name))
            })
            .cloned()
            .collect();

        if images.is_empty() {
            tracing::debug!(%case_id, "no images, dropping case");
            continue;
        }
        tracing::debug!(%case_id, count = images.len(), "found images");
        index.insert(CaseEntry {
            case_id,
            images,
            label: Some(label),
        });
    }
    Ok(())
}

/// Patient layout: one subdirectory per case, files classified by the two
/// configured filename patterns.
fn scan_patient(config: &ScanConfig, index: &mut CaseIndex) -> Result<()> {
    if config.image_pattern.is_empty() || config.label_pattern.is_empty() {
        return Err(IndexError::MissingPattern);
    }
    let image_pattern = FilenamePattern::compile("image", &config.image_pattern)?;
    let label_pattern = FilenamePattern::compile("label", &config.label_pattern)?;

    for patient in read_entries(&config.images_root)? {
        let Some(name) = file_name(&patient) else {
            continue;
        };
        if !patient.is_dir() || name.starts_with('.') {
            continue;
        }
        let case_id = name.to_string();
        tracing::debug!(%case_id, "looking for images");

        let mut images = Vec::new();
        let mut label = None;
        for file in read_entries(&patient)? {
            let Some(child_name) = file_name(&file) else {
                continue;
            };
            if child_name.starts_with('.') {
                continue;
            }
            // Both classifications are tested independently: one file may be
            // image and label at once, and a later label match replaces an
            // earlier one. Entries arrive sorted, so the replacement order is
            // stable across scans.
            if image_pattern.matches(child_name) {
                images.push(file.clone());
            }
            if label_pattern.matches(child_name) {
                label = Some(file);
            }
        }

        if images.is_empty() {
            tracing::debug!(%case_id, "no images found");
        } else {
            tracing::debug!(%case_id, count = images.len(), "found images");
            index.insert(CaseEntry {
                case_id: case_id.clone(),
                images,
                label: label.clone(),
            });
        }
        if label.is_none() {
            tracing::warn!(%case_id, "no label found");
        }
    }
    Ok(())
}

/// Paired layout: a label file pairs with the image of the exact same
/// filename in the images root.
fn scan_paired(config: &ScanConfig, index: &mut CaseIndex) -> Result<()> {
    let labels_root = config
        .labels_root
        .as_deref()
        .ok_or(IndexError::MissingLabelsRoot)?;

    for label in read_entries(labels_root)? {
        let Some(name) = file_name(&label) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        let case_id = case_id_from(name).to_string();
        tracing::debug!(%case_id, "looking for image");

        // The full filename must match, extension included; existence is
        // enough, with no file-type check.
        let image = config.images_root.join(name);
        if !image.exists() {
            tracing::debug!(%case_id, "no matching image");
            continue;
        }
        index.insert(CaseEntry {
            case_id,
            images: vec![image],
            label: Some(label),
        });
    }
    Ok(())
}

/// Lists directory entries sorted by filename, so results never depend on
/// the OS enumeration order.
fn read_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IndexError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IndexError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IndexError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        paths.push(entry.path());
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

/// Case id shared by the nnU-Net and paired layouts: the filename truncated
/// at its FIRST dot. `017.nii.gz` becomes `017`; a name with extra
/// dot-separated parts truncates at the first dot all the same.
fn case_id_from(name: &str) -> &str {
    name.split_once('.').map_or(name, |(stem, _)| stem)
}

/// `{case_id}*` glob semantics: plain prefix match, except that a leading-dot
/// entry only matches when the case id itself starts with a dot.
fn prefix_glob_matches(case_id: &str, name: &str) -> bool {
    if name.starts_with('.') && !case_id.starts_with('.') {
        return false;
    }
    name.starts_with(case_id)
}
