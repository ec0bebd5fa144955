//! A single numbered page of wrapped lines

use serde::{Deserialize, Serialize};

/// A numbered, bounded group of wrapped output lines
///
/// Pages are only created by [`Document::add_page`](super::Document::add_page),
/// which assigns the number and never stores an empty page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number
    pub(crate) number: usize,
    /// Wrapped lines in output order
    pub(crate) lines: Vec<String>,
}

impl Page {
    pub(crate) fn new(number: usize, lines: Vec<String>) -> Self {
        Self { number, lines }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines on this page
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
