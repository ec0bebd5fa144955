//! Command-line arguments and config resolution

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use text_pager::{LengthMetric, OutputFormat, OverflowPolicy, PaginatorConfig, Result};

pub const DEFAULT_INPUT: &str = "document.txt";
pub const DEFAULT_OUTPUT: &str = "result.txt";

/// Reflow plain text into fixed-width, fixed-height pages
#[derive(Parser, Debug)]
#[command(name = "text-pager", version)]
pub struct Cli {
    /// Text file to paginate
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where to save the paginated document
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Write the paginated document to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// JSON config file with pagination limits
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum characters per line
    #[arg(long)]
    pub max_chars: Option<usize>,

    /// Maximum lines per page
    #[arg(long)]
    pub max_lines: Option<usize>,

    /// How line length is counted
    #[arg(long, value_enum)]
    pub metric: Option<MetricArg>,

    /// Never let a multi-word line run past the limit
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Log pagination details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MetricArg {
    Bytes,
    Chars,
    Graphemes,
}

impl From<MetricArg> for LengthMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Bytes => LengthMetric::Bytes,
            MetricArg::Chars => LengthMetric::Chars,
            MetricArg::Graphemes => LengthMetric::Graphemes,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Defaults, then the config file, then flags
    pub fn resolve_config(&self) -> Result<PaginatorConfig> {
        let mut config = match &self.config {
            Some(path) => PaginatorConfig::from_json_file(path)?,
            None => PaginatorConfig::default(),
        };

        if let Some(max_chars) = self.max_chars {
            config.max_chars_per_line = max_chars;
        }
        if let Some(max_lines) = self.max_lines {
            config.max_lines_per_page = max_lines;
        }
        if let Some(metric) = self.metric {
            config.metric = metric.into();
        }
        if self.strict {
            config.overflow = OverflowPolicy::Strict;
        }

        config.validate()?;
        Ok(config)
    }
}
