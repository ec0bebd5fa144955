//! Word wrapping and page breaking

mod config;
mod line_break;
mod measure;
mod pagination;
#[cfg(test)]
mod proptests;

pub use config::{
    OverflowPolicy, PaginatorConfig, DEFAULT_MAX_CHARS_PER_LINE, DEFAULT_MAX_LINES_PER_PAGE,
};
pub use line_break::{split_words, LineFiller, SealedLine, SealedLines};
pub use measure::LengthMetric;
pub use pagination::{PaginationStats, Paginator};
