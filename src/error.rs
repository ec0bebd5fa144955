//! Error types for pagination runs.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the I/O and configuration boundary.
///
/// The paginator itself cannot fail; every variant here comes from reading
/// the source, writing the destination, or resolving configuration.
#[derive(Error, Debug)]
pub enum PagerError {
    /// Input path could not be opened or read.
    #[error("cannot read source {}", path.display())]
    SourceUnavailable {
        /// Path of the input resource.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// Output path could not be created or written.
    #[error("cannot write destination {}", path.display())]
    DestinationUnwritable {
        /// Path of the output resource.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// Config file could not be opened or read.
    #[error("cannot read config {}", path.display())]
    ConfigUnavailable {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// Configuration values are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The output writer could not render the document.
    #[error("cannot render document: {0}")]
    Render(String),
}

/// Result type for pager operations.
pub type Result<T> = std::result::Result<T, PagerError>;
