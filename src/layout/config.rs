//! Pagination limits and policies

use crate::error::{PagerError, Result};
use crate::layout::LengthMetric;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default maximum characters per output line
pub const DEFAULT_MAX_CHARS_PER_LINE: usize = 80;

/// Default maximum output lines per page
pub const DEFAULT_MAX_LINES_PER_PAGE: usize = 25;

/// What to do when a word does not fit on a partially filled line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Historical behavior: if the buffer plus one space is still under the
    /// limit, the word is appended anyway and the line runs past the limit.
    #[default]
    Compat,
    /// Only a single oversized word may exceed the limit.
    Strict,
}

/// Limits the paginator works against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginatorConfig {
    /// Maximum characters per line, including inter-word spaces
    pub max_chars_per_line: usize,
    /// Maximum lines per page
    pub max_lines_per_page: usize,
    /// How characters are counted
    pub metric: LengthMetric,
    /// Handling of words that overflow a partial line
    pub overflow: OverflowPolicy,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            max_chars_per_line: DEFAULT_MAX_CHARS_PER_LINE,
            max_lines_per_page: DEFAULT_MAX_LINES_PER_PAGE,
            metric: LengthMetric::default(),
            overflow: OverflowPolicy::default(),
        }
    }
}

impl PaginatorConfig {
    /// Create a config with the given limits and default policies
    pub fn with_limits(max_chars_per_line: usize, max_lines_per_page: usize) -> Self {
        Self {
            max_chars_per_line,
            max_lines_per_page,
            ..Self::default()
        }
    }

    /// Reject limits the paginator cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.max_chars_per_line == 0 {
            return Err(PagerError::InvalidConfig(
                "max_chars_per_line must be positive".into(),
            ));
        }
        if self.max_lines_per_page == 0 {
            return Err(PagerError::InvalidConfig(
                "max_lines_per_page must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON config; missing keys keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| PagerError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| PagerError::ConfigUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
