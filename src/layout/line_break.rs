//! Greedy line filling

use crate::layout::{LengthMetric, OverflowPolicy, PaginatorConfig};
use smallvec::SmallVec;

/// A line that has left the buffer, with its measured length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedLine {
    pub text: String,
    pub width: usize,
}

/// Lines sealed by a single word: at most the previous buffer and the word itself
pub type SealedLines = SmallVec<[SealedLine; 2]>;

/// Split a raw input line into words on runs of whitespace
pub fn split_words(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Line filler
///
/// Holds the in-progress output line and decides, word by word, when it is
/// sealed. Words flow across input line boundaries.
#[derive(Debug, Clone)]
pub struct LineFiller {
    limit: usize,
    metric: LengthMetric,
    overflow: OverflowPolicy,
    buffer: String,
    width: usize,
}

impl LineFiller {
    pub fn new(config: &PaginatorConfig) -> Self {
        Self {
            limit: config.max_chars_per_line,
            metric: config.metric,
            overflow: config.overflow,
            buffer: String::with_capacity(config.max_chars_per_line),
            width: 0,
        }
    }

    /// Measured length of the buffer
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Feed one word, returning any lines it caused to be sealed
    pub fn push_word(&mut self, word: &str) -> SealedLines {
        let mut sealed = SealedLines::new();
        let word_width = self.metric.measure(word);

        if self.prospective_width(word_width) > self.limit && !self.tolerates_overflow() {
            // Oversized words on an empty buffer are kept whole
            sealed.extend(self.take());
        }
        self.append(word, word_width);

        if self.width == self.limit {
            sealed.extend(self.take());
        }
        sealed
    }

    /// Seal whatever is left in the buffer
    pub fn take(&mut self) -> Option<SealedLine> {
        if self.buffer.is_empty() {
            return None;
        }
        let text = std::mem::replace(&mut self.buffer, String::with_capacity(self.limit));
        let width = std::mem::take(&mut self.width);
        Some(SealedLine { text, width })
    }

    /// Buffer length after appending a word of the given width
    fn prospective_width(&self, word_width: usize) -> usize {
        self.separator_width() + word_width
    }

    fn separator_width(&self) -> usize {
        if self.buffer.is_empty() {
            0
        } else {
            self.width + 1
        }
    }

    /// Whether an overflowing word still joins the current line
    fn tolerates_overflow(&self) -> bool {
        self.overflow == OverflowPolicy::Compat
            && !self.buffer.is_empty()
            && self.width + 1 < self.limit
    }

    fn append(&mut self, word: &str, word_width: usize) {
        if !self.buffer.is_empty() {
            self.buffer.push(' ');
            self.width += 1;
        }
        self.buffer.push_str(word);
        self.width += word_width;
    }
}
