//! Scan configuration surface.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk dataset convention to scan for cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetLayout {
    /// nnU-Net convention: parallel `images{Tr,Ts}` and `labels{Tr,Ts}`
    /// directories, images named by case-id prefix.
    #[default]
    NnUnet,
    /// One subdirectory per case holding its images and label together,
    /// told apart by filename patterns.
    Patient,
    /// Two independent directories where identically named files form a pair.
    Paired,
}

/// Which half of an nnU-Net dataset to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NnUnetSplit {
    #[default]
    Train,
    Test,
}

impl NnUnetSplit {
    /// Directory suffix used by the nnU-Net convention (`imagesTr`, `labelsTs`, ...).
    pub fn dir_suffix(self) -> &'static str {
        match self {
            Self::Train => "Tr",
            Self::Test => "Ts",
        }
    }
}

/// Recognized scan options.
///
/// Field names double as the option keys the host serializes. `image_pattern`
/// and `label_pattern` are consulted only in [`DatasetLayout::Patient`] mode;
/// `labels_root` only in [`DatasetLayout::Paired`] mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub mode: DatasetLayout,
    #[serde(default)]
    pub nnunet_submode: NnUnetSplit,
    /// Anchored filename pattern classifying image files.
    #[serde(default)]
    pub image_pattern: String,
    /// Anchored filename pattern classifying label files.
    #[serde(default)]
    pub label_pattern: String,
    #[serde(default)]
    pub images_root: PathBuf,
    /// Second root directory holding label files.
    #[serde(default)]
    pub labels_root: Option<PathBuf>,
}

impl ScanConfig {
    /// Configuration for an nnU-Net dataset rooted at `root`.
    pub fn nnunet(root: impl Into<PathBuf>, split: NnUnetSplit) -> Self {
        Self {
            mode: DatasetLayout::NnUnet,
            nnunet_submode: split,
            images_root: root.into(),
            ..Self::default()
        }
    }

    /// Configuration for a patient-per-directory dataset rooted at `root`.
    pub fn patient(
        root: impl Into<PathBuf>,
        image_pattern: impl Into<String>,
        label_pattern: impl Into<String>,
    ) -> Self {
        Self {
            mode: DatasetLayout::Patient,
            image_pattern: image_pattern.into(),
            label_pattern: label_pattern.into(),
            images_root: root.into(),
            ..Self::default()
        }
    }

    /// Configuration for two paired image and label directories.
    pub fn paired(images_root: impl Into<PathBuf>, labels_root: impl Into<PathBuf>) -> Self {
        Self {
            mode: DatasetLayout::Paired,
            images_root: images_root.into(),
            labels_root: Some(labels_root.into()),
            ..Self::default()
        }
    }
}
