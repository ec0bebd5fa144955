//! Pagination for multi-page documents

use crate::document::Document;
use crate::error::Result;
use crate::layout::line_break::{split_words, LineFiller, SealedLine};
use crate::layout::PaginatorConfig;
use serde::Serialize;
use tracing::{debug, trace};

/// Counters gathered while paginating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PaginationStats {
    /// Words consumed from the input
    pub words: usize,
    /// Lines sealed onto pages
    pub lines: usize,
    /// Pages appended to the document
    pub pages: usize,
    /// Words longer than the line limit on their own
    pub oversized_words: usize,
    /// Multi-word lines that ran past the line limit
    pub overflowed_lines: usize,
}

/// Greedy line-fill / page-fill paginator
///
/// A pure function of its configuration and input: the same lines always
/// produce the same document.
#[derive(Debug, Clone)]
pub struct Paginator {
    config: PaginatorConfig,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            config: PaginatorConfig::default(),
        }
    }
}

impl Paginator {
    /// Create a paginator, rejecting zero limits
    pub fn new(config: PaginatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    /// Paginate a sequence of raw input lines
    pub fn paginate<I, S>(&self, lines: I) -> Document
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.paginate_with_stats(lines).0
    }

    /// Paginate a block of text, splitting it on line breaks
    pub fn paginate_text(&self, text: &str) -> Document {
        self.paginate(text.lines())
    }

    /// Paginate and report what happened along the way
    pub fn paginate_with_stats<I, S>(&self, lines: I) -> (Document, PaginationStats)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = PaginationState::new(&self.config);
        for line in lines {
            for word in split_words(line.as_ref()) {
                state.push_word(word);
            }
        }
        let (document, stats) = state.finish();

        debug_assert!(
            document.check(&self.config).is_empty(),
            "paginator broke document invariants: {:?}",
            document.check(&self.config)
        );
        debug!(
            words = stats.words,
            lines = stats.lines,
            pages = stats.pages,
            "pagination finished"
        );
        (document, stats)
    }
}

/// In-progress pagination: the document so far, the open page, the line buffer
struct PaginationState {
    filler: LineFiller,
    document: Document,
    page: Vec<String>,
    max_chars_per_line: usize,
    max_lines_per_page: usize,
    stats: PaginationStats,
}

impl PaginationState {
    fn new(config: &PaginatorConfig) -> Self {
        Self {
            filler: LineFiller::new(config),
            document: Document::new(),
            page: Vec::with_capacity(config.max_lines_per_page.min(64)),
            max_chars_per_line: config.max_chars_per_line,
            max_lines_per_page: config.max_lines_per_page,
            stats: PaginationStats::default(),
        }
    }

    fn push_word(&mut self, word: &str) {
        self.stats.words += 1;
        for line in self.filler.push_word(word) {
            self.seal_line(line);
        }
    }

    /// Move a sealed line onto the open page, sealing the page once full
    fn seal_line(&mut self, line: SealedLine) {
        self.stats.lines += 1;
        if line.width > self.max_chars_per_line {
            if line.text.contains(' ') {
                self.stats.overflowed_lines += 1;
            } else {
                self.stats.oversized_words += 1;
            }
        }

        self.page.push(line.text);
        if self.page.len() == self.max_lines_per_page {
            self.seal_page();
        }
    }

    fn seal_page(&mut self) {
        let lines = std::mem::take(&mut self.page);
        let count = lines.len();
        if let Some(number) = self.document.add_page(lines) {
            trace!(page = number, lines = count, "sealed page");
            self.stats.pages += 1;
        }
    }

    /// Flush the trailing partial line and the last page, if they hold anything
    fn finish(mut self) -> (Document, PaginationStats) {
        if let Some(line) = self.filler.take() {
            self.seal_line(line);
        }
        if !self.page.is_empty() {
            self.seal_page();
        }
        (self.document, self.stats)
    }
}
