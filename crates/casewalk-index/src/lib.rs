//! Case discovery for NIfTI dataset directory trees.
//!
//! This crate maps the three conventional dataset layouts (nnU-Net,
//! patient-per-directory, paired directories) into a uniform [`CaseIndex`]:
//! an ordered set of case ids, each with its image files and optional
//! segmentation label.
//!
//! # Example
//!
//! ```ignore
//! use casewalk_index::build_index;
//! use casewalk_model::{NnUnetSplit, ScanConfig};
//!
//! let config = ScanConfig::nnunet("/data/Dataset001_Brain", NnUnetSplit::Train);
//! let outcome = build_index(&config);
//! for id in outcome.index.case_ids() {
//!     println!("{id}");
//! }
//! ```
//!
//! [`CaseIndex`]: casewalk_model::CaseIndex

mod error;
mod patterns;
mod scan;

// === Error Types ===
pub use error::{IndexError, Result};

// === Pattern Matching ===
pub use patterns::FilenamePattern;

// === Discovery ===
pub use scan::{ScanOutcome, build_index};
