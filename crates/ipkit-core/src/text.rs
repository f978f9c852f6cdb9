//! Line-oriented `key=value` output.
//!
//! Consumers (CI steps writing to `$GITHUB_OUTPUT` and similar) split each
//! line on the first `=`, so `=` inside a value needs no escaping. Line
//! breaks would start a new record, so values must be single-line.

use crate::error::{ReleaseError, Result};

/// Collapse all whitespace, including carriage returns, into single spaces.
///
/// ```
/// use ipkit_core::text::normalize_single_line;
///
/// assert_eq!(normalize_single_line("a\r\nb   c"), "a b c");
/// assert_eq!(normalize_single_line("a b c"), "a b c");
/// ```
pub fn normalize_single_line(value: &str) -> String {
    value
        .replace('\r', "\n")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// An ordered set of `key=value` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueLines {
    entries: Vec<(&'static str, String)>,
}

impl KeyValueLines {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::MultilineValue`] if `value` contains `\r` or `\n`.
    pub fn push(&mut self, key: &'static str, value: impl Into<String>) -> Result<&mut Self> {
        let value = value.into();
        if value.contains(['\r', '\n']) {
            return Err(ReleaseError::MultilineValue { key, value });
        }
        self.entries.push((key, value));
        Ok(self)
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl std::fmt::Display for KeyValueLines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{key}={value}")?;
        }
        Ok(())
    }
}
