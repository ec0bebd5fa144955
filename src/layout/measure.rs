//! Length metrics for words and lines

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// How the "characters" of a word are counted against the line limit
///
/// None of these are display-width aware: a wide CJK glyph counts the same
/// as an ASCII letter under `Chars` and `Graphemes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMetric {
    /// UTF-8 byte length
    Bytes,
    /// Unicode scalar values
    Chars,
    /// Extended grapheme clusters
    #[default]
    Graphemes,
}

impl LengthMetric {
    /// Measure a single word
    pub fn measure(self, word: &str) -> usize {
        match self {
            LengthMetric::Bytes => word.len(),
            LengthMetric::Chars => word.chars().count(),
            LengthMetric::Graphemes => word.graphemes(true).count(),
        }
    }

    /// Measure a wrapped line as its words plus one per separating space
    ///
    /// Words are measured independently, so a combining mark at the start of
    /// a word never merges with the preceding separator.
    pub fn measure_line(self, line: &str) -> usize {
        if line.is_empty() {
            return 0;
        }
        let mut words = 0;
        let mut width = 0;
        for word in line.split(' ') {
            words += 1;
            width += self.measure(word);
        }
        width + words - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_agrees() {
        for metric in [LengthMetric::Bytes, LengthMetric::Chars, LengthMetric::Graphemes] {
            assert_eq!(metric.measure("hello"), 5);
            assert_eq!(metric.measure_line("hello big world"), 15);
        }
    }

    #[test]
    fn test_multibyte_word() {
        // "é" as e + combining acute
        let word = "cafe\u{301}";
        assert_eq!(LengthMetric::Bytes.measure(word), 6);
        assert_eq!(LengthMetric::Chars.measure(word), 5);
        assert_eq!(LengthMetric::Graphemes.measure(word), 4);
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(LengthMetric::Graphemes.measure_line(""), 0);
    }

    #[test]
    fn test_deserialize_lowercase() {
        let metric: LengthMetric = serde_json::from_str("\"bytes\"").unwrap();
        assert_eq!(metric, LengthMetric::Bytes);
    }
}
