//! Position tracking over the ordered case list.

use casewalk_model::{CaseEntry, CaseIndex};

use crate::error::{Result, SessionError};

/// Cursor over the case index's display order.
///
/// The position clamps to `[0, len - 1]` and never wraps. With an empty index
/// there is nothing to point at and [`NavigationCursor::current`] fails. The
/// cursor holds no reference to the index; callers pass the index they own,
/// and reset the cursor whenever that index is rebuilt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationCursor {
    position: usize,
}

impl NavigationCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position, or `None` when the index is empty.
    pub fn position(&self, index: &CaseIndex) -> Option<usize> {
        if index.is_empty() {
            None
        } else {
            Some(self.position.min(index.len() - 1))
        }
    }

    /// Moves to `case_id` if the index knows it. Unknown ids are ignored;
    /// returns whether the selection changed anything.
    pub fn select(&mut self, index: &CaseIndex, case_id: &str) -> bool {
        match index.position(case_id) {
            Some(position) => {
                self.position = position;
                true
            }
            None => {
                tracing::debug!(case_id, "select ignored, unknown case");
                false
            }
        }
    }

    /// Steps forward, stopping at the last case.
    pub fn next(&mut self, index: &CaseIndex) {
        if self.position + 1 < index.len() {
            self.position += 1;
        }
    }

    /// Steps backward, stopping at the first case.
    pub fn previous(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Entry under the cursor.
    pub fn current<'a>(&self, index: &'a CaseIndex) -> Result<&'a CaseEntry> {
        let position = self.position(index).ok_or(SessionError::NothingSelected)?;
        index.at(position).ok_or(SessionError::NothingSelected)
    }

    /// Rewinds to the first case.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}
