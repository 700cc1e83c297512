//! Error types for case discovery.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a case index.
#[derive(Debug, Error)]
pub enum IndexError {
    // === Configuration Errors ===
    /// Patient mode requires both filename patterns.
    #[error("image and label patterns must both be provided")]
    MissingPattern,

    /// A filename pattern failed to compile.
    #[error("invalid {which} pattern `{pattern}`: {source}")]
    InvalidPattern {
        which: &'static str,
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// Paired mode requires a labels root directory.
    #[error("a labels directory is required for the paired layout")]
    MissingLabelsRoot,

    // === Filesystem Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IndexError {
    /// Whether the error was raised by configuration checks, before any
    /// filesystem access.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingPattern | Self::InvalidPattern { .. } | Self::MissingLabelsRoot
        )
    }
}

/// Result type for discovery operations.
pub type Result<T> = std::result::Result<T, IndexError>;
