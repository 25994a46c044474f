//! PDF processing module.

mod extractor;

pub use extractor::{PdfExtractor, PdfReader};

use std::path::Path;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from a specific page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String>;
}

/// Source of page text for a document on disk.
pub trait PageReader {
    /// Text of `page` (1-indexed) of the document at `path`.
    fn read_page(&self, path: &Path, page: u32) -> Result<String>;
}
