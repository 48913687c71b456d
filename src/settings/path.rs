//! Dotted setting paths

use crate::error::SettingsError;
use std::fmt;

/// A parsed dotted setting path such as `vm.resources.cpus`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingPath {
    raw: String,
    segments: Vec<String>,
}

impl SettingPath {
    /// Split a dotted path into its segments.
    ///
    /// Every segment must be non-empty; `""`, `"vm..cpus"` and `"vm."` name nothing.
    pub fn parse(raw: &str) -> Result<Self, SettingsError> {
        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(SettingsError::PathNotFound {
                path: raw.to_string(),
            });
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The first `len` segments joined back with dots
    pub fn prefix(&self, len: usize) -> String {
        self.segments[..len.min(self.segments.len())].join(".")
    }

    /// Segments leading up to the leaf
    pub fn parent(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// Final segment
    pub fn leaf(&self) -> &str {
        // parse() guarantees at least one segment
        &self.segments[self.segments.len() - 1]
    }
}

impl fmt::Display for SettingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
