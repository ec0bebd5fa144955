//! Render output: serialize a paginated document

mod json;
mod text;

pub use json::JsonWriter;
pub use text::{page_header, TextWriter};

use crate::document::Document;
use std::io;

/// Serializes a document to a byte sink
pub trait Writer {
    /// Write the whole document to `out`
    fn write_document(&self, document: &Document, out: &mut dyn io::Write) -> io::Result<()>;

    /// Render the whole document into memory
    fn render_to_string(&self, document: &Document) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write_document(document, &mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Page blocks with `--- Page N --- ` headers
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Get the writer for this format
    pub fn writer(self) -> Box<dyn Writer> {
        match self {
            OutputFormat::Text => Box::new(TextWriter),
            OutputFormat::Json => Box::new(JsonWriter::pretty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Paginator;

    #[test]
    fn test_format_picks_writer() {
        let doc = Paginator::default().paginate(["hello"]);
        let text = OutputFormat::Text.writer().render_to_string(&doc).unwrap();
        let json = OutputFormat::Json.writer().render_to_string(&doc).unwrap();

        assert!(text.starts_with("--- Page 1 --- \n"));
        assert!(json.trim_start().starts_with('{'));
    }
}
