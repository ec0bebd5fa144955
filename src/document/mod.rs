//! Paginated document model

mod page;

pub use page::Page;

use crate::layout::{OverflowPolicy, PaginatorConfig};
use serde::{Deserialize, Serialize};

/// The complete paginated output: an ordered sequence of pages
///
/// Pages are only ever appended, numbered contiguously from 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pages: Vec<Page>,
}

/// A broken document invariant, as reported by [`Document::check`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A page with zero lines was appended
    EmptyPage { number: usize },
    /// A page other than the last is not full
    ShortPage { number: usize, lines: usize },
    /// A page holds more lines than allowed
    OverfullPage { number: usize, lines: usize },
    /// Page numbers are not `1..=P` in order
    NumberGap { expected: usize, found: usize },
    /// A multi-word line exceeds the character limit
    LineTooLong {
        page: usize,
        line: usize,
        length: usize,
    },
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page holding `lines`, numbered after the last one
    ///
    /// Returns the assigned page number, or `None` when `lines` is empty and
    /// nothing was appended.
    pub fn add_page(&mut self, lines: Vec<String>) -> Option<usize> {
        if lines.is_empty() {
            return None;
        }
        let number = self.pages.len() + 1;
        self.pages.push(Page::new(number, lines));
        Some(number)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Get a page by its 1-based number
    pub fn page(&self, number: usize) -> Option<&Page> {
        number.checked_sub(1).and_then(|idx| self.pages.get(idx))
    }

    /// Get total page count
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of lines across all pages
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    /// Iterate every line in page order
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.pages
            .iter()
            .flat_map(|page| page.lines().iter().map(String::as_str))
    }

    /// Check the document against the limits it was paginated with
    ///
    /// Line lengths are only checked under [`OverflowPolicy::Strict`]; the
    /// compat policy lets multi-word lines run past the limit.
    /// Single-word lines are never reported.
    pub fn check(&self, config: &PaginatorConfig) -> Vec<Violation> {
        let mut found = Vec::new();
        let last = self.pages.len();

        for (idx, page) in self.pages.iter().enumerate() {
            let expected = idx + 1;
            if page.number() != expected {
                found.push(Violation::NumberGap {
                    expected,
                    found: page.number(),
                });
            }

            if page.is_empty() {
                found.push(Violation::EmptyPage {
                    number: page.number(),
                });
            } else if page.len() > config.max_lines_per_page {
                found.push(Violation::OverfullPage {
                    number: page.number(),
                    lines: page.len(),
                });
            } else if expected != last && page.len() < config.max_lines_per_page {
                found.push(Violation::ShortPage {
                    number: page.number(),
                    lines: page.len(),
                });
            }

            if config.overflow == OverflowPolicy::Strict {
                for (line_idx, line) in page.lines().iter().enumerate() {
                    let length = config.metric.measure_line(line);
                    if length > config.max_chars_per_line && line.contains(' ') {
                        found.push(Violation::LineTooLong {
                            page: page.number(),
                            line: line_idx + 1,
                            length,
                        });
                    }
                }
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> PaginatorConfig {
        PaginatorConfig {
            max_chars_per_line: 10,
            max_lines_per_page: 2,
            overflow: OverflowPolicy::Strict,
            ..PaginatorConfig::default()
        }
    }

    fn lines(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    fn page(number: usize, text: &[&str]) -> Page {
        Page::new(number, lines(text))
    }

    #[test]
    fn test_new_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.line_count(), 0);
    }

    #[test]
    fn test_add_page_assigns_numbers() {
        let mut doc = Document::new();
        assert_eq!(doc.add_page(lines(&["a"])), Some(1));
        assert_eq!(doc.add_page(lines(&["b"])), Some(2));
        assert_eq!(doc.page(2).map(Page::number), Some(2));
    }

    #[test]
    fn test_add_page_rejects_empty_page() {
        let mut doc = Document::new();
        assert_eq!(doc.add_page(Vec::new()), None);
        assert!(doc.is_empty());

        doc.add_page(lines(&["only"]));
        assert_eq!(doc.add_page(Vec::new()), None);
        assert_eq!(doc.page_count(), 1);
        assert!(doc.check(&PaginatorConfig::default()).is_empty());
    }

    #[test]
    fn test_page_lookup_is_one_based() {
        let mut doc = Document::new();
        doc.add_page(lines(&["a", "b"]));
        doc.add_page(lines(&["c"]));

        assert!(doc.page(0).is_none());
        assert_eq!(doc.page(2).map(Page::len), Some(1));
        assert!(doc.page(3).is_none());
        assert_eq!(doc.lines().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn test_valid_document_has_no_violations() {
        let mut doc = Document::new();
        doc.add_page(lines(&["one two", "three"]));
        doc.add_page(lines(&["averyveryverylongword"]));
        assert!(doc.check(&small_config()).is_empty());
    }

    #[test]
    fn test_reports_short_and_long() {
        let doc = Document {
            pages: vec![page(1, &["one"]), page(3, &["one two three four"])],
        };
        let found = doc.check(&small_config());

        assert!(found.contains(&Violation::ShortPage { number: 1, lines: 1 }));
        assert!(found.contains(&Violation::NumberGap { expected: 2, found: 3 }));
        assert!(found.contains(&Violation::LineTooLong {
            page: 3,
            line: 1,
            length: 18
        }));
    }

    #[test]
    fn test_compat_skips_line_lengths() {
        let doc = Document {
            pages: vec![page(1, &["one two three four"])],
        };
        let config = PaginatorConfig {
            overflow: OverflowPolicy::Compat,
            ..small_config()
        };
        assert!(doc.check(&config).is_empty());
    }

    #[test]
    fn test_serializes_pages() {
        let mut doc = Document::new();
        doc.add_page(lines(&["hello world"]));
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(json, r#"{"pages":[{"number":1,"lines":["hello world"]}]}"#);
    }
}
