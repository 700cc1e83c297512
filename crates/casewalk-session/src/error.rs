//! Error types for session commands.

use thiserror::Error;

/// Errors surfaced by session commands.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No case is available to load (the index is empty).
    #[error("no case selected")]
    NothingSelected,

    /// Case discovery failed; the index keeps whatever was built before the
    /// failure.
    #[error(transparent)]
    Index(#[from] casewalk_index::IndexError),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
