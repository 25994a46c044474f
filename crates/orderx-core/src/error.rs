//! Error types for the orderx-core library.

use thiserror::Error;

/// Main error type for the orderx library.
#[derive(Error, Debug)]
pub enum OrderxError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Workbook output error.
    #[error("sheet error: {0}")]
    Sheet(#[from] SheetError),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),

    /// The input could not be read from disk.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to order field extraction.
///
/// These never abort a document: the parser turns each one into a
/// sentinel value plus a warning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// An anchor phrase was not found in the text.
    #[error("anchor not found for {field}: {anchor:?}")]
    MissingAnchor { field: String, anchor: String },

    /// The anchor was found but no value followed it.
    #[error("empty value for {0}")]
    EmptyValue(String),

    /// Failed to parse a value.
    #[error("failed to parse {field}: {value:?}")]
    Parse { field: String, value: String },
}

/// Errors related to writing the output workbook.
#[derive(Error, Debug)]
pub enum SheetError {
    /// The workbook file could not be created.
    #[error("cannot create workbook {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The underlying xlsx writer rejected an operation.
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// The workbook has already been closed.
    #[error("workbook already closed")]
    Closed,
}

/// Result type for the orderx library.
pub type Result<T> = std::result::Result<T, OrderxError>;
