//! Core library for purchase-order extraction.
//!
//! This crate provides:
//! - PDF page text extraction
//! - Anchor-based extraction of order fields, price tables and delivery schedules
//! - Joining of per-country prices and delivery dates into order rows
//! - Excel workbook output, one sheet per document

pub mod error;
pub mod extract;
pub mod models;
pub mod pdf;
pub mod processor;
pub mod sheet;

pub use error::{OrderxError, Result};
pub use extract::{ExtractionResult, OrderParser};
pub use models::config::OrderxConfig;
pub use models::order::{DeliveryEntry, OrderRow, OrderTable, PriceEntry, StaticFields};
pub use pdf::{PageReader, PdfExtractor, PdfProcessor, PdfReader};
pub use processor::{DocumentOutcome, DocumentProcessor};
pub use sheet::{SheetStyle, SheetWriter, XlsxWorkbook};
