//! Filename pattern compilation and matching.

use regex::Regex;

use crate::error::{IndexError, Result};

/// A filename classifier compiled from a user-supplied pattern.
///
/// Matching is anchored at the start of the name only; the pattern must
/// spell out `$` itself to also anchor the end. Named capture groups are
/// accepted in the syntax but only match/no-match is consumed.
#[derive(Debug, Clone)]
pub struct FilenamePattern {
    regex: Regex,
}

impl FilenamePattern {
    /// Compiles `pattern`, tagging any compile error with the configuration
    /// field it came from.
    pub fn compile(which: &'static str, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| IndexError::InvalidPattern {
            which,
            pattern: pattern.to_string(),
            source: Box::new(source),
        })?;
        Ok(Self { regex })
    }

    /// Tests `name`, requiring the match to begin at the first byte.
    pub fn matches(&self, name: &str) -> bool {
        self.regex.find(name).is_some_and(|m| m.start() == 0)
    }
}
