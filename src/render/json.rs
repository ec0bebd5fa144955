//! JSON output for machine consumers

use crate::document::Document;
use crate::render::Writer;
use std::io;

/// Writes the document as `{"pages":[{"number":1,"lines":[...]}]}`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    /// Single-line JSON
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented JSON
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Writer for JsonWriter {
    fn write_document(&self, document: &Document, out: &mut dyn io::Write) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, document)?;
        } else {
            serde_json::to_writer(&mut *out, document)?;
        }
        writeln!(out)
    }
}
