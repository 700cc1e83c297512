//! Data model for the NIfTI case browser.
//!
//! This crate holds the pure data types shared by the indexer and the
//! session: the scan configuration surface, individual case entries, and the
//! ordered case index. Nothing here touches the filesystem.

pub mod config;
pub mod index;

// === Configuration ===
pub use config::{DatasetLayout, NnUnetSplit, ScanConfig};

// === Case Index ===
pub use index::{CaseEntry, CaseIndex};
