//! text-pager: reflow plain text into fixed-size pages
//!
//! This crate provides:
//! - A greedy word-wrap and page-break algorithm over an unbounded line stream
//! - A paginated document model with checkable invariants
//! - Text and JSON writers for the paginated result
//! - File I/O glue with atomic output writes
//! - WASM bindings with a flat page buffer

pub mod document;
pub mod error;
pub mod layout;
pub mod render;
pub mod source;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmPaginator;

// Re-export primary types
pub use document::{Document, Page, Violation};
pub use error::{PagerError, Result};
pub use layout::{
    LengthMetric, OverflowPolicy, PaginationStats, Paginator, PaginatorConfig,
    DEFAULT_MAX_CHARS_PER_LINE, DEFAULT_MAX_LINES_PER_PAGE,
};
pub use render::{JsonWriter, OutputFormat, TextWriter, Writer};
pub use source::{paginate_file, paginate_reader, write_document};
