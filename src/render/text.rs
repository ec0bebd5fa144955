//! Plain-text page block format

use crate::document::Document;
use crate::render::Writer;
use std::io;

/// Header line for a page, including the trailing space before the newline
pub fn page_header(number: usize) -> String {
    format!("--- Page {} --- ", number)
}

/// Writes each page as a header, its lines verbatim, then one blank line
///
/// ```text
/// --- Page 1 ---
/// first line
/// second line
///
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextWriter;

impl Writer for TextWriter {
    fn write_document(&self, document: &Document, out: &mut dyn io::Write) -> io::Result<()> {
        for page in document.pages() {
            writeln!(out, "{}", page_header(page.number()))?;
            for line in page.lines() {
                writeln!(out, "{}", line)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
