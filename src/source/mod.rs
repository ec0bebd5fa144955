//! Reading input text and writing paginated output

use crate::document::Document;
use crate::error::{PagerError, Result};
use crate::layout::{PaginationStats, Paginator};
use crate::render::Writer;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Paginate everything readable from `reader`, line by line
///
/// Lines are decoded lossily so stray non-UTF-8 bytes never abort a run.
/// The first read error stops pagination and is returned.
pub fn paginate_reader<R: BufRead>(
    reader: R,
    paginator: &Paginator,
) -> io::Result<(Document, PaginationStats)> {
    let mut failure = None;
    let lines = reader.split(b'\n').map_while(|line| match line {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            failure = Some(e);
            None
        }
    });
    let paginated = paginator.paginate_with_stats(lines);

    match failure {
        Some(e) => Err(e),
        None => Ok(paginated),
    }
}

/// Open and paginate the file at `path`
pub fn paginate_file(
    path: impl AsRef<Path>,
    paginator: &Paginator,
) -> Result<(Document, PaginationStats)> {
    let path = path.as_ref();
    let source_error = |source| PagerError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(source_error)?;
    debug!(path = %path.display(), "reading source");
    paginate_reader(BufReader::new(file), paginator).map_err(source_error)
}

/// Render `document` and atomically replace `path` with the result
///
/// The rendering is completed in memory and written to a temporary file next
/// to `path`, which is then renamed into place. A failed run never leaves a
/// partially written destination.
pub fn write_document(
    path: impl AsRef<Path>,
    document: &Document,
    writer: &dyn Writer,
) -> Result<()> {
    let path = path.as_ref();
    let dest_error = |source| PagerError::DestinationUnwritable {
        path: path.to_path_buf(),
        source,
    };

    let mut rendered = Vec::new();
    writer
        .write_document(document, &mut rendered)
        .map_err(|e| PagerError::Render(e.to_string()))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(dest_error)?;
    tmp.write_all(&rendered).map_err(dest_error)?;
    tmp.flush().map_err(dest_error)?;
    tmp.persist(path).map_err(|e| dest_error(e.error))?;

    debug!(
        path = %path.display(),
        bytes = rendered.len(),
        pages = document.page_count(),
        "wrote destination"
    );
    Ok(())
}
