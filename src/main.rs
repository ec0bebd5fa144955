//! text-pager CLI: paginate a text file and save the result

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use text_pager::{paginate_file, write_document, OutputFormat, Paginator};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Structured logging to stderr; stdout is reserved for output and status
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("text_pager={level}"))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    let paginator = Paginator::new(config)?;
    info!(
        max_chars = config.max_chars_per_line,
        max_lines = config.max_lines_per_page,
        "paginating {}",
        cli.input.display()
    );

    let (document, stats) = paginate_file(&cli.input, &paginator)?;
    info!(
        words = stats.words,
        lines = stats.lines,
        pages = stats.pages,
        oversized_words = stats.oversized_words,
        overflowed_lines = stats.overflowed_lines,
        "paginated"
    );

    let writer = OutputFormat::from(cli.format).writer();
    if cli.stdout {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        writer
            .write_document(&document, &mut out)
            .and_then(|()| out.flush())
            .context("failed to write to stdout")?;
        return Ok(());
    }

    write_document(&cli.output, &document, writer.as_ref())?;
    println!(
        "Paginated document has been saved to {}",
        cli.output.display()
    );
    Ok(())
}
