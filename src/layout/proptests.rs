//! Property-based tests for pagination.
//!
//! These verify the document invariants for arbitrary word streams:
//!
//! - Multi-word lines respect the line limit under the strict policy
//! - Every page but the last is full, and no page is empty
//! - Page numbers run `1..=P` without gaps
//! - Words come out in input order, none lost or split
//! - Pagination is deterministic

use proptest::prelude::*;

use crate::layout::{LengthMetric, OverflowPolicy, Paginator, PaginatorConfig};
use crate::render::{TextWriter, Writer};

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,15}"
}

/// Raw input lines: words joined by assorted whitespace, blank lines included
fn raw_lines() -> impl Strategy<Value = Vec<String>> {
    let separator = prop_oneof![Just(" "), Just("  "), Just("\t"), Just(" \t ")];
    let line = prop::collection::vec((word(), separator), 0..12).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(w, sep)| format!("{w}{sep}"))
            .collect::<String>()
    });
    prop::collection::vec(line, 0..40)
}

fn config() -> impl Strategy<Value = PaginatorConfig> {
    (
        1usize..40,
        1usize..8,
        prop_oneof![Just(OverflowPolicy::Compat), Just(OverflowPolicy::Strict)],
        prop_oneof![
            Just(LengthMetric::Bytes),
            Just(LengthMetric::Chars),
            Just(LengthMetric::Graphemes)
        ],
    )
        .prop_map(|(chars, lines, overflow, metric)| PaginatorConfig {
            max_chars_per_line: chars,
            max_lines_per_page: lines,
            metric,
            overflow,
        })
}

proptest! {
    /// Page structure and (strict) line lengths hold for any input.
    #[test]
    fn document_invariants_hold(lines in raw_lines(), config in config()) {
        let doc = Paginator::new(config).unwrap().paginate(&lines);
        prop_assert!(doc.check(&config).is_empty());
    }

    /// Strict lines never exceed the limit unless they are one oversized word.
    #[test]
    fn strict_lines_bounded(lines in raw_lines(), chars in 1usize..40) {
        let config = PaginatorConfig {
            max_chars_per_line: chars,
            overflow: OverflowPolicy::Strict,
            ..PaginatorConfig::default()
        };
        let doc = Paginator::new(config).unwrap().paginate(&lines);
        for line in doc.lines() {
            prop_assert!(line.len() <= chars || !line.contains(' '), "line {:?}", line);
        }
    }

    /// Compat lines overflow by at most one word.
    #[test]
    fn compat_overflow_bounded(lines in raw_lines(), chars in 1usize..40) {
        let config = PaginatorConfig::with_limits(chars, 25);
        let doc = Paginator::new(config).unwrap().paginate(&lines);
        for line in doc.lines() {
            let last_word = line.rsplit(' ').next().unwrap_or("");
            prop_assert!(line.len() <= chars.max(last_word.len() + chars - 1), "line {:?}", line);
        }
    }

    /// Numbering is contiguous from 1 and only the last page may be short.
    #[test]
    fn pages_numbered_and_full(lines in raw_lines(), config in config()) {
        let doc = Paginator::new(config).unwrap().paginate(&lines);
        let count = doc.page_count();
        for (idx, page) in doc.pages().iter().enumerate() {
            prop_assert_eq!(page.number(), idx + 1);
            prop_assert!(!page.is_empty());
            if idx + 1 < count {
                prop_assert_eq!(page.len(), config.max_lines_per_page);
            }
        }
    }

    /// Output words are exactly the input words, in order.
    #[test]
    fn words_preserved(lines in raw_lines(), config in config()) {
        let doc = Paginator::new(config).unwrap().paginate(&lines);
        let input: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        let output: Vec<&str> = doc.lines().flat_map(|l| l.split(' ')).collect();
        prop_assert_eq!(input, output);
    }

    /// Identical input and configuration render byte-identical output.
    #[test]
    fn pagination_deterministic(lines in raw_lines(), config in config()) {
        let paginator = Paginator::new(config).unwrap();
        let first = TextWriter.render_to_string(&paginator.paginate(&lines)).unwrap();
        let second = TextWriter.render_to_string(&paginator.paginate(&lines)).unwrap();
        prop_assert_eq!(first, second);
    }
}
