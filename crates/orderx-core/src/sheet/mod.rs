//! Spreadsheet output.
//!
//! One sheet per source document, named after the source file.

mod xlsx;

pub use xlsx::XlsxWorkbook;

use std::collections::HashSet;

use crate::error::SheetError;
use crate::models::config::OutputConfig;
use crate::models::order::OrderTable;

/// Result type for sheet operations.
pub type Result<T> = std::result::Result<T, SheetError>;

/// Characters Excel does not allow in sheet names.
const FORBIDDEN: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Trait for workbook writers receiving one table per document.
pub trait SheetWriter {
    /// Add a sheet holding `table`. Returns the sheet name actually used.
    fn add_sheet(&mut self, name: &str, table: &OrderTable) -> Result<String>;
}

/// Formatting applied to every sheet of a workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStyle {
    pub font_name: String,
    pub font_size: f64,
    pub column_padding: f64,
    pub max_name_len: usize,
}

impl From<&OutputConfig> for SheetStyle {
    fn from(config: &OutputConfig) -> Self {
        Self {
            font_name: config.font_name.clone(),
            font_size: config.font_size,
            column_padding: config.column_padding,
            max_name_len: config.max_sheet_name_len,
        }
    }
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self::from(&OutputConfig::default())
    }
}

/// Sheet name for a source file: forbidden characters replaced and
/// truncated to `max_len` characters.
pub fn sheet_name(file_name: &str, max_len: usize) -> String {
    let cleaned: String = file_name
        .trim()
        .chars()
        .map(|c| if FORBIDDEN.contains(&c) { '_' } else { c })
        .take(max_len)
        .collect();

    // Excel rejects names starting or ending with an apostrophe.
    let cleaned = cleaned.trim_matches('\'');
    if cleaned.is_empty() {
        "Sheet".to_string()
    } else {
        cleaned.to_string()
    }
}

/// `name`, or `name (n)` shortened to fit `max_len`, whichever is not yet
/// in `taken`. Comparison is case-insensitive, as in Excel; `taken` holds
/// lowercased names.
pub fn unique_sheet_name(name: &str, taken: &HashSet<String>, max_len: usize) -> String {
    if !taken.contains(&name.to_lowercase()) {
        return name.to_string();
    }

    let mut n = 2;
    loop {
        let suffix = format!(" ({})", n);
        let keep = max_len.saturating_sub(suffix.chars().count());
        let base: String = name.chars().take(keep).collect();
        let candidate = format!("{}{}", base, suffix);
        if !taken.contains(&candidate.to_lowercase()) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_name_truncates() {
        let name = sheet_name("PO_4711_knitted_jumper_autumn_winter.pdf", 31);
        assert_eq!(name, "PO_4711_knitted_jumper_autumn_w");
        assert_eq!(name.chars().count(), 31);
    }

    #[test]
    fn test_sheet_name_keeps_short_names() {
        assert_eq!(sheet_name("order.pdf", 31), "order.pdf");
    }

    #[test]
    fn test_sheet_name_replaces_forbidden_chars() {
        assert_eq!(sheet_name("PO [draft]: v2?.pdf", 31), "PO _draft__ v2_.pdf");
        assert_eq!(sheet_name("'quoted'", 31), "quoted");
        assert_eq!(sheet_name("", 31), "Sheet");
    }

    #[test]
    fn test_unique_sheet_name() {
        let mut taken = HashSet::new();
        assert_eq!(unique_sheet_name("order.pdf", &taken, 31), "order.pdf");

        taken.insert("order.pdf".to_string());
        assert_eq!(unique_sheet_name("Order.PDF", &taken, 31), "Order.PDF (2)");

        taken.insert("order.pdf (2)".to_string());
        assert_eq!(unique_sheet_name("order.pdf", &taken, 31), "order.pdf (3)");
    }

    #[test]
    fn test_unique_sheet_name_fits_limit() {
        let long = "a".repeat(31);
        let taken: HashSet<String> = [long.clone()].into_iter().collect();

        let name = unique_sheet_name(&long, &taken, 31);
        assert_eq!(name.chars().count(), 31);
        assert!(name.ends_with(" (2)"));
    }
}
