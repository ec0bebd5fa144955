//! WASM bindings for the paginator

pub mod flat_buffer;

use crate::document::Document;
use crate::layout::{Paginator, PaginatorConfig};
use crate::render::{JsonWriter, TextWriter, Writer};
use flat_buffer::PageBuffer;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed paginator wrapper
///
/// Keeps the last paginated document so JS can read it back as text, JSON,
/// or through the flat page buffer.
#[wasm_bindgen]
pub struct WasmPaginator {
    paginator: Paginator,
    document: Document,
    buffer: PageBuffer,
}

#[wasm_bindgen]
impl WasmPaginator {
    /// Create a paginator with the default 80 x 25 page
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_paginator(Paginator::default())
    }

    /// Create a paginator with custom limits
    #[wasm_bindgen(js_name = withLimits)]
    pub fn with_limits(
        max_chars_per_line: usize,
        max_lines_per_page: usize,
    ) -> Result<WasmPaginator, JsError> {
        let config = PaginatorConfig::with_limits(max_chars_per_line, max_lines_per_page);
        let paginator = Paginator::new(config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self::with_paginator(paginator))
    }

    /// Paginate text and return it in the page block format
    pub fn paginate(&mut self, text: &str) -> String {
        self.document = self.paginator.paginate_text(text);
        TextWriter.render_to_string(&self.document).unwrap_or_default()
    }

    /// Paginate text and return the document as JSON
    #[wasm_bindgen(js_name = paginateJson)]
    pub fn paginate_json(&mut self, text: &str) -> String {
        self.document = self.paginator.paginate_text(text);
        JsonWriter::compact()
            .render_to_string(&self.document)
            .unwrap_or_default()
    }

    /// Paginate an array of raw lines, returning the page count
    #[wasm_bindgen(js_name = paginateLines)]
    pub fn paginate_lines(&mut self, lines: js_sys::Array) -> usize {
        let lines = lines.iter().filter_map(|value| value.as_string());
        self.document = self.paginator.paginate(lines);
        self.document.page_count()
    }

    /// Get page count of the last document
    #[wasm_bindgen(js_name = pageCount)]
    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    /// Get total line count of the last document
    #[wasm_bindgen(js_name = lineCount)]
    pub fn line_count(&self) -> usize {
        self.document.line_count()
    }

    /// Get the lines of one page (1-based) joined by newlines
    #[wasm_bindgen(js_name = pageText)]
    pub fn page_text(&self, number: usize) -> Option<String> {
        self.document.page(number).map(|page| page.lines().join("\n"))
    }

    /// Encode the last document into the flat page buffer
    #[wasm_bindgen(js_name = buildPageBuffer)]
    pub fn build_page_buffer(&mut self) {
        self.buffer.encode(&self.document, self.paginator.config());
    }

    #[wasm_bindgen(js_name = bufferU32Ptr)]
    pub fn buffer_u32_ptr(&self) -> u32 {
        self.buffer.u32_ptr()
    }

    #[wasm_bindgen(js_name = bufferU32Len)]
    pub fn buffer_u32_len(&self) -> u32 {
        self.buffer.u32_len()
    }

    #[wasm_bindgen(js_name = bufferTextPtr)]
    pub fn buffer_text_ptr(&self) -> u32 {
        self.buffer.text_ptr()
    }

    #[wasm_bindgen(js_name = bufferTextLen)]
    pub fn buffer_text_len(&self) -> u32 {
        self.buffer.text_len()
    }
}

impl WasmPaginator {
    fn with_paginator(paginator: Paginator) -> Self {
        Self {
            paginator,
            document: Document::new(),
            buffer: PageBuffer::new(),
        }
    }
}

impl Default for WasmPaginator {
    fn default() -> Self {
        Self::new()
    }
}
