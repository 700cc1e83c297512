//! Case entries and the ordered case index.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One discovered case: its image files and the optional segmentation label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseEntry {
    pub case_id: String,
    /// Image file paths, sorted by filename. Non-empty for every entry the
    /// indexer inserts.
    pub images: Vec<PathBuf>,
    pub label: Option<PathBuf>,
}

/// All cases discovered by one scan, keyed and ordered by case id.
///
/// Backed by a `BTreeMap` so that the display order (lexicographic ascending)
/// and case-id uniqueness hold by construction, independent of filesystem
/// enumeration order. The index is rebuilt from scratch on every scan and
/// replaced wholesale; it is never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseIndex {
    cases: BTreeMap<String, CaseEntry>,
}

impl CaseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Inserts an entry, replacing any previous entry with the same case id.
    pub fn insert(&mut self, entry: CaseEntry) {
        self.cases.insert(entry.case_id.clone(), entry);
    }

    pub fn get(&self, case_id: &str) -> Option<&CaseEntry> {
        self.cases.get(case_id)
    }

    pub fn contains(&self, case_id: &str) -> bool {
        self.cases.contains_key(case_id)
    }

    /// Case ids in display order.
    pub fn case_ids(&self) -> impl Iterator<Item = &str> {
        self.cases.keys().map(String::as_str)
    }

    /// Entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = &CaseEntry> {
        self.cases.values()
    }

    /// Position of a case id in the display order.
    pub fn position(&self, case_id: &str) -> Option<usize> {
        self.cases.keys().position(|id| id == case_id)
    }

    /// Entry at a display-order position.
    pub fn at(&self, position: usize) -> Option<&CaseEntry> {
        self.cases.values().nth(position)
    }
}
