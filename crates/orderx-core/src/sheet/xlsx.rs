//! Excel workbook output using rust_xlsxwriter.

use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::{debug, error};

use super::{Result, SheetStyle, SheetWriter, sheet_name, unique_sheet_name};
use crate::error::SheetError;
use crate::models::order::{Cell, HEADERS, OrderTable};

/// An xlsx workbook collecting one sheet per document.
///
/// The output file is created up front and written exactly once, either by
/// [`XlsxWorkbook::close`] or, failing that, when the workbook is dropped.
pub struct XlsxWorkbook {
    workbook: Workbook,
    file: Option<File>,
    path: PathBuf,
    style: SheetStyle,
    format: Format,
    taken: HashSet<String>,
}

impl XlsxWorkbook {
    /// Create the output file and an empty workbook.
    pub fn create(path: impl AsRef<Path>, style: SheetStyle) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| SheetError::Create {
            path: path.display().to_string(),
            source,
        })?;

        let format = Format::new()
            .set_font_name(style.font_name.as_str())
            .set_font_size(style.font_size);

        debug!("Created workbook {}", path.display());

        Ok(Self {
            workbook: Workbook::new(),
            file: Some(file),
            path,
            style,
            format,
            taken: HashSet::new(),
        })
    }

    /// Path of the output file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of sheets added so far.
    pub fn sheet_count(&self) -> usize {
        self.taken.len()
    }

    /// Write the workbook to disk.
    pub fn close(mut self) -> Result<()> {
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        let file = self.file.take().ok_or(SheetError::Closed)?;
        self.workbook.save_to_writer(file)?;
        debug!("Saved workbook {} with {} sheets", self.path.display(), self.taken.len());
        Ok(())
    }

    fn build_sheet(&self, name: &str, table: &OrderTable) -> Result<Worksheet> {
        let mut worksheet = Worksheet::new();
        worksheet.set_name(name)?;

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &self.format)?;
        }

        for (i, row) in table.rows.iter().enumerate() {
            let row_num = (i + 1) as u32;
            for (col, cell) in row.cells().iter().enumerate() {
                let col = col as u16;
                match cell {
                    Cell::Integer(n) => {
                        worksheet.write_number_with_format(row_num, col, *n as f64, &self.format)?
                    }
                    Cell::Decimal(d) => worksheet.write_number_with_format(
                        row_num,
                        col,
                        d.to_f64().unwrap_or_default(),
                        &self.format,
                    )?,
                    other => {
                        worksheet.write_string_with_format(row_num, col, &other.display(), &self.format)?
                    }
                };
            }
        }

        for (col, width) in table.column_widths().iter().enumerate() {
            let col = col as u16;
            worksheet.set_column_width(col, *width as f64 + self.style.column_padding)?;
            worksheet.set_column_format(col, &self.format)?;
        }

        Ok(worksheet)
    }
}

impl SheetWriter for XlsxWorkbook {
    fn add_sheet(&mut self, name: &str, table: &OrderTable) -> Result<String> {
        if self.file.is_none() {
            return Err(SheetError::Closed);
        }

        let name = unique_sheet_name(
            &sheet_name(name, self.style.max_name_len),
            &self.taken,
            self.style.max_name_len,
        );

        let worksheet = self.build_sheet(&name, table)?;
        self.workbook.push_worksheet(worksheet);
        self.taken.insert(name.to_lowercase());

        debug!("Added sheet {:?} with {} rows", name, table.len());
        Ok(name)
    }
}

impl Drop for XlsxWorkbook {
    fn drop(&mut self) {
        if self.file.is_some() {
            if let Err(e) = self.flush() {
                error!("Failed to save workbook {}: {}", self.path.display(), e);
            }
        }
    }
}
