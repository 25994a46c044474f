//! Per-document processing: page text in, one workbook sheet out.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::Result;
use crate::extract::OrderParser;
use crate::pdf::PageReader;
use crate::sheet::SheetWriter;

/// What happened to one input document.
#[derive(Debug, Clone)]
pub struct DocumentOutcome {
    /// Source file.
    pub path: PathBuf,
    /// Sheet the rows were written to.
    pub sheet: String,
    /// Number of rows written.
    pub rows: usize,
    /// Field and section diagnostics.
    pub warnings: Vec<String>,
}

/// Runs page reading, extraction and sheet writing for single documents.
pub struct DocumentProcessor<'a> {
    reader: &'a dyn PageReader,
    parser: &'a OrderParser,
    page: u32,
}

impl<'a> DocumentProcessor<'a> {
    pub fn new(reader: &'a dyn PageReader, parser: &'a OrderParser) -> Self {
        Self {
            reader,
            parser,
            page: 1,
        }
    }

    /// Read a page other than the first.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Process one document into `writer`.
    ///
    /// Unreadable input and rejected sheets are returned as errors so the
    /// caller can skip the document; field and section failures are only
    /// logged and reported in the outcome.
    pub fn process(&self, path: &Path, writer: &mut dyn SheetWriter) -> Result<DocumentOutcome> {
        let file_name = display_name(path);

        info!("Reading page {} of {}", self.page, file_name);
        let text = self.reader.read_page(path, self.page)?;

        let result = self.parser.parse(&text);
        for warning in &result.warnings {
            warn!(document = %file_name, "Incomplete extraction from {}: {}", file_name, warning);
        }

        let sheet = writer.add_sheet(&file_name, &result.table)?;
        info!(
            "Wrote {} rows from {} to sheet {:?}",
            result.table.len(),
            file_name,
            sheet
        );

        Ok(DocumentOutcome {
            path: path.to_path_buf(),
            sheet,
            rows: result.table.len(),
            warnings: result.warnings,
        })
    }
}

/// Base name of a path, falling back to the whole path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().trim().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
