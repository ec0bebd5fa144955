//! Flat buffer protocol for zero-copy WASM bridge
//!
//! Binary format for paginated documents:
//!
//! ## u32 Buffer Layout:
//! ```text
//! Header:
//! [0]     MAGIC (0x54504752 = "TPGR" for validation)
//! [1]     SCHEMA_VERSION (protocol version, currently 1)
//! [2]     page_count
//! [3]     line_count (total over all pages)
//! [4]     text_buffer_len
//! [5]     max_chars_per_line
//! [6]     max_lines_per_page
//! [7..]   page data...
//!
//! Per-page:
//!   page_number (1-based)
//!   line_count
//!   per-line: [text_offset, text_len, text_utf16_offset, text_utf16_len, flags]
//!     text_offset/text_len: byte offsets in text_data (UTF-8)
//!     text_utf16_offset/text_utf16_len: offsets for JS substring (after single decode)
//!     flags: bit0=over_limit, bit1=single_word
//! ```

use crate::document::Document;
use crate::layout::PaginatorConfig;

/// Magic number for format validation: "TPGR" (Text PaGeR)
pub const MAGIC: u32 = 0x54504752;

/// Schema version for protocol compatibility checking
pub const SCHEMA_VERSION: u32 = 1;

/// Header size in u32 elements
pub const HEADER_SIZE: usize = 7;

/// Number of u32 values per page header
pub const U32_PER_PAGE: usize = 2;

/// Number of u32 values per line
/// [text_offset, text_len, text_utf16_offset, text_utf16_len, flags]
pub const U32_PER_LINE: usize = 5;

/// Line is longer than the configured limit
pub const FLAG_OVER_LIMIT: u32 = 0b0001;
/// Line holds a single word
pub const FLAG_SINGLE_WORD: u32 = 0b0010;

/// Clamp a limit into a header slot
fn saturate(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Page buffer for zero-copy WASM transfer
pub struct PageBuffer {
    /// Integer data (header, counts, offsets, flags)
    pub u32_data: Vec<u32>,
    /// UTF-8 text buffer
    pub text_data: Vec<u8>,

    // Total lines written, synced to the header in finalize()
    lines_written: usize,

    // Track cumulative UTF-16 offset for efficient JS decoding
    utf16_text_offset: usize,
}

impl Default for PageBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBuffer {
    pub fn new() -> Self {
        Self {
            u32_data: Vec::with_capacity(1024),
            text_data: Vec::with_capacity(4096),
            lines_written: 0,
            utf16_text_offset: 0,
        }
    }

    /// Encode a whole document
    pub fn from_document(document: &Document, config: &PaginatorConfig) -> Self {
        let mut buf = Self::new();
        buf.encode(document, config);
        buf
    }

    /// Re-encode a document into this buffer, reusing its allocations
    pub fn encode(&mut self, document: &Document, config: &PaginatorConfig) {
        let line_count = document.line_count();
        let text_needed: usize = document.lines().map(str::len).sum();
        self.prepare(
            HEADER_SIZE + document.page_count() * U32_PER_PAGE + line_count * U32_PER_LINE,
            text_needed,
        );

        self.write_header(document.page_count() as u32, config);
        for page in document.pages() {
            let line_idx = self.begin_page(page.number());
            for line in page.lines() {
                let mut flags = 0;
                if config.metric.measure_line(line) > config.max_chars_per_line {
                    flags |= FLAG_OVER_LIMIT;
                }
                if !line.contains(' ') {
                    flags |= FLAG_SINGLE_WORD;
                }
                self.write_line(line, flags);
            }
            self.set_line_count(line_idx, page.len() as u32);
        }
        self.finalize();
    }

    pub fn clear(&mut self) {
        self.u32_data.clear();
        self.text_data.clear();
        self.lines_written = 0;
        self.utf16_text_offset = 0;
    }

    /// Pre-allocate buffers to avoid reallocation during encoding.
    /// Critical: JS holds pointers to these buffers, so realloc would cause invalid pointers.
    pub fn prepare(&mut self, u32_needed: usize, text_needed: usize) {
        // Target capacities with headroom
        let u32_target = u32_needed + 32;
        let text_target = text_needed + 256;

        // Reuse buffers if capacity is sufficient
        if self.u32_data.capacity() < u32_target {
            self.u32_data = Vec::with_capacity(u32_target);
        } else {
            self.u32_data.clear();
        }

        if self.text_data.capacity() < text_target {
            self.text_data = Vec::with_capacity(text_target);
        } else {
            self.text_data.clear();
        }

        self.lines_written = 0;
        self.utf16_text_offset = 0;
    }

    /// Write header
    pub fn write_header(&mut self, page_count: u32, config: &PaginatorConfig) {
        self.u32_data.push(MAGIC); // [0] magic number
        self.u32_data.push(SCHEMA_VERSION); // [1] schema version
        self.u32_data.push(page_count); // [2] page_count
        self.u32_data.push(0); // [3] line_count (placeholder)
        self.u32_data.push(0); // [4] text_buffer_len (placeholder)
        self.u32_data.push(saturate(config.max_chars_per_line)); // [5]
        self.u32_data.push(saturate(config.max_lines_per_page)); // [6]
    }

    /// Finalize buffer: synchronize header counts
    /// Must be called after all page/line operations
    pub fn finalize(&mut self) {
        if self.u32_data.len() < HEADER_SIZE {
            return;
        }

        self.u32_data[3] = self.lines_written as u32;
        self.u32_data[4] = self.text_data.len() as u32;

        #[cfg(debug_assertions)]
        self.validate_text_offsets();
    }

    /// Validate that all text offsets are within bounds (debug builds only)
    #[cfg(debug_assertions)]
    fn validate_text_offsets(&self) {
        let page_count = self.u32_data[2] as usize;
        let text_len = self.text_data.len();
        let mut idx = HEADER_SIZE;

        for _ in 0..page_count {
            if idx + 1 >= self.u32_data.len() {
                break;
            }

            let page_number = self.u32_data[idx];
            let line_count = self.u32_data[idx + 1] as usize;
            idx += U32_PER_PAGE;

            for line_idx in 0..line_count {
                if idx + U32_PER_LINE > self.u32_data.len() {
                    break;
                }

                let text_offset = self.u32_data[idx] as usize;
                let text_length = self.u32_data[idx + 1] as usize;
                debug_assert!(
                    text_offset + text_length <= text_len,
                    "Invalid text range for page {}, line {}: offset {} + length {} > text buffer size {}",
                    page_number, line_idx, text_offset, text_length, text_len
                );

                idx += U32_PER_LINE;
            }
        }
    }

    /// Write page header, returns index where line_count should be written
    pub fn begin_page(&mut self, page_number: usize) -> usize {
        self.u32_data.push(page_number as u32);
        let line_count_idx = self.u32_data.len();
        self.u32_data.push(0); // line_count placeholder
        line_count_idx
    }

    /// Update line count for a page
    pub fn set_line_count(&mut self, idx: usize, count: u32) {
        if idx < self.u32_data.len() {
            self.u32_data[idx] = count;
        }
    }

    /// Write a text line
    pub fn write_line(&mut self, text: &str, flags: u32) {
        let text_offset = self.text_data.len() as u32;
        self.text_data.extend_from_slice(text.as_bytes());
        let text_len = text.len() as u32;

        // UTF-16 offset and length for efficient JS decoding
        let text_utf16_offset = self.utf16_text_offset as u32;
        let text_utf16_len = text.chars().map(|c| c.len_utf16()).sum::<usize>() as u32;
        self.utf16_text_offset += text_utf16_len as usize;

        debug_assert!(
            (text_offset as u64) + (text_len as u64) <= u32::MAX as u64,
            "Text offset + length overflow: {} + {} > u32::MAX",
            text_offset,
            text_len
        );

        self.u32_data.push(text_offset);
        self.u32_data.push(text_len);
        self.u32_data.push(text_utf16_offset);
        self.u32_data.push(text_utf16_len);
        self.u32_data.push(flags);
        self.lines_written += 1;
    }

    // Accessors for WASM
    // Return u32 instead of usize for explicit WASM contract (wasm32 linear memory uses u32 offsets)

    pub fn u32_ptr(&self) -> u32 {
        self.u32_data.as_ptr() as u32
    }

    pub fn u32_len(&self) -> u32 {
        self.u32_data.len() as u32
    }

    pub fn text_ptr(&self) -> u32 {
        self.text_data.as_ptr() as u32
    }

    pub fn text_len(&self) -> u32 {
        self.text_data.len() as u32
    }
}
