//! PDF page text extraction using lopdf and pdf-extract.

use lopdf::Document;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use super::{PageReader, PdfProcessor, Result};
use crate::error::PdfError;

/// PDF content extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Page text as laid out by pdf-extract, used when lopdf yields nothing.
    fn fallback_page_text(&self, page: u32) -> Result<String> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        pages
            .into_iter()
            .nth((page - 1) as usize)
            .ok_or(PdfError::InvalidPage(page))
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let doc = self
            .document
            .as_ref()
            .ok_or(PdfError::Parse("No document loaded".to_string()))?;

        if page == 0 || page > self.page_count() {
            return Err(PdfError::InvalidPage(page));
        }

        match doc.extract_text(&[page]) {
            Ok(text) if !text.trim().is_empty() => Ok(text),
            Ok(_) => {
                trace!("lopdf returned no text for page {}, trying pdf-extract", page);
                self.fallback_page_text(page)
            }
            Err(e) => {
                trace!("lopdf failed on page {}: {}, trying pdf-extract", page, e);
                self.fallback_page_text(page)
            }
        }
    }
}

/// [`PageReader`] backed by [`PdfExtractor`].
///
/// A page without any text (e.g. a scanned image) is an error, so the
/// document is skipped rather than written as an empty sheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReader;

impl PageReader for PdfReader {
    fn read_page(&self, path: &Path, page: u32) -> Result<String> {
        let data = fs::read(path)?;
        let mut extractor = PdfExtractor::new();
        extractor.load(&data)?;

        let text = extractor.extract_page_text(page)?;
        if text.trim().is_empty() {
            return Err(PdfError::TextExtraction(format!("page {} has no text", page)));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Object, Stream, dictionary};

    const ORDER_LINES: [&str; 8] = [
        "Order No: 4711-02 Date of Order: 01 Dec, 2023",
        "Product Description: Knitted Jumper",
        "No of Pieces: 1200",
        "Invoice Average Price Country",
        "12.50 USD GB, FR",
        "By accepting and performing under this Order, the Supplier acknowledges:",
        "Time of Delivery Planning Markets Quantity % Total Qty",
        "05 Jan, 2024 GB (UK Online) 1200 100% Total: 1200",
    ];

    /// One-page PDF with each line in its own text object.
    fn one_page_pdf(lines: &[&str]) -> Vec<u8> {
        let mut doc = lopdf::Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 10.into()]));
            operations.push(Operation::new("Td", vec![50.into(), (800 - 14 * i as i64).into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut data = Vec::new();
        doc.save_to(&mut data).unwrap();
        data
    }

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_load_rejects_non_pdf() {
        let mut extractor = PdfExtractor::new();
        let result = extractor.load(b"Order No: 12345, definitely not a PDF");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_extract_without_document() {
        let extractor = PdfExtractor::new();
        assert!(extractor.extract_page_text(1).is_err());
    }

    #[test]
    fn test_reader_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PdfReader.read_page(&dir.path().join("missing.pdf"), 1);
        assert!(matches!(result, Err(PdfError::Io(_))));
    }

    #[test]
    fn test_extract_page_text_from_loaded_pdf() {
        let mut extractor = PdfExtractor::new();
        extractor.load(&one_page_pdf(&ORDER_LINES)).unwrap();

        assert_eq!(extractor.page_count(), 1);
        let text = extractor.extract_page_text(1).unwrap();
        assert!(text.contains("Order No: 4711-02"), "{:?}", text);
        assert!(text.contains("12.50 USD GB, FR"), "{:?}", text);

        assert!(matches!(extractor.extract_page_text(2), Err(PdfError::InvalidPage(2))));
        assert!(matches!(extractor.extract_page_text(0), Err(PdfError::InvalidPage(0))));
    }

    #[test]
    fn test_fallback_page_text() {
        let mut extractor = PdfExtractor::new();
        extractor.load(&one_page_pdf(&ORDER_LINES)).unwrap();

        let text = extractor.fallback_page_text(1).unwrap();
        assert!(text.contains("Knitted Jumper"), "{:?}", text);
        assert!(matches!(extractor.fallback_page_text(3), Err(PdfError::InvalidPage(3))));
    }

    #[test]
    fn test_reader_page_feeds_parser() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("po_4711.pdf");
        fs::write(&path, one_page_pdf(&ORDER_LINES)).unwrap();

        let text = PdfReader.read_page(&path, 1).unwrap();
        let result = crate::OrderParser::new().parse(&text);
        let rows = &result.table.rows;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].order_no.as_deref(), Some("4711-02"));
        assert_eq!(rows[0].no_of_pieces, Some(1200));
        assert_eq!(rows[0].time_of_delivery, chrono::NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(rows[1].country.as_deref(), Some("FR"));
        assert_eq!(rows[1].time_of_delivery, None);
    }

    #[test]
    fn test_reader_rejects_page_without_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.pdf");
        fs::write(&path, one_page_pdf(&[])).unwrap();

        let result = PdfReader.read_page(&path, 1);
        assert!(matches!(result, Err(PdfError::TextExtraction(_))), "{:?}", result);
    }

    #[test]
    fn test_reader_rejects_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "just some notes").unwrap();

        assert!(PdfReader.read_page(&path, 1).is_err());
    }
}
