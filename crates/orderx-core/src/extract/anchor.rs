//! Labeled single-value fields.

use crate::error::ExtractionError;
use crate::models::config::AnchorConfig;
use crate::models::order::StaticFields;

use super::Result;

/// How the value after a label is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMode {
    /// Rest of the line.
    Line,
    /// First whitespace-delimited token.
    Token,
    /// Rest of the line, parsed as an integer.
    Integer,
}

/// A field located by the text immediately following a fixed label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAnchor {
    /// Name used in diagnostics.
    pub name: &'static str,
    pub label: String,
    pub mode: FieldMode,
}

impl FieldAnchor {
    pub fn new(name: &'static str, label: impl Into<String>, mode: FieldMode) -> Self {
        Self {
            name,
            label: label.into(),
            mode,
        }
    }

    /// Raw value after the first occurrence of the label.
    ///
    /// Whitespace (line breaks included) between the label and the value
    /// is skipped, so a label at the end of a line reads the next line.
    pub fn raw<'t>(&self, text: &'t str) -> Result<&'t str> {
        let start = text
            .find(&self.label)
            .ok_or_else(|| ExtractionError::MissingAnchor {
                field: self.name.to_string(),
                anchor: self.label.clone(),
            })?
            + self.label.len();

        let rest = text[start..].trim_start();
        let value = match self.mode {
            FieldMode::Token => rest.split_whitespace().next().unwrap_or(""),
            FieldMode::Line | FieldMode::Integer => rest.lines().next().unwrap_or("").trim(),
        };

        if value.is_empty() {
            return Err(ExtractionError::EmptyValue(self.name.to_string()));
        }
        Ok(value)
    }

    /// Value as text.
    pub fn text(&self, text: &str) -> Result<String> {
        self.raw(text).map(str::to_string)
    }

    /// Value parsed as a signed integer.
    pub fn integer(&self, text: &str) -> Result<i64> {
        let raw = self.raw(text)?;
        raw.parse().map_err(|_| ExtractionError::Parse {
            field: self.name.to_string(),
            value: raw.to_string(),
        })
    }
}

/// The anchors of every static field, each extracted once per document.
#[derive(Debug, Clone)]
pub struct StaticFieldAnchors {
    pub order_no: FieldAnchor,
    pub product_description: FieldAnchor,
    pub season: FieldAnchor,
    pub type_of_construction: FieldAnchor,
    pub no_of_pieces: FieldAnchor,
    pub sales_mode: FieldAnchor,
}

impl StaticFieldAnchors {
    pub fn from_config(anchors: &AnchorConfig) -> Self {
        Self {
            order_no: FieldAnchor::new("order number", &anchors.order_no, FieldMode::Token),
            product_description: FieldAnchor::new(
                "product description",
                &anchors.product_description,
                FieldMode::Line,
            ),
            season: FieldAnchor::new("season", &anchors.season, FieldMode::Line),
            type_of_construction: FieldAnchor::new(
                "type of construction",
                &anchors.type_of_construction,
                FieldMode::Line,
            ),
            no_of_pieces: FieldAnchor::new(
                "number of pieces",
                &anchors.no_of_pieces,
                FieldMode::Integer,
            ),
            sales_mode: FieldAnchor::new("sales mode", &anchors.sales_mode, FieldMode::Line),
        }
    }

    /// Extract all static fields. Each failure leaves that field `None`
    /// and appends a warning.
    pub fn extract(&self, text: &str, warnings: &mut Vec<String>) -> StaticFields {
        let mut keep = |result: Result<String>| record(result, warnings);

        let order_no = keep(self.order_no.text(text));
        let product_description = keep(self.product_description.text(text));
        let season = keep(self.season.text(text));
        let type_of_construction = keep(self.type_of_construction.text(text));
        let sales_mode = keep(self.sales_mode.text(text));
        let no_of_pieces = record(self.no_of_pieces.integer(text), warnings);

        StaticFields {
            order_no,
            product_description,
            season,
            type_of_construction,
            no_of_pieces,
            sales_mode,
        }
    }
}

impl Default for StaticFieldAnchors {
    fn default() -> Self {
        Self::from_config(&AnchorConfig::default())
    }
}

fn record<T>(result: Result<T>, warnings: &mut Vec<String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warnings.push(e.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "\
Order No: 12345 Date of Order: 01 Dec, 2023
Product Description: Knitted Jumper
Season: 1-2024
Type of Construction: Knitted
No of Pieces: 1200
Sales Mode: Set
";

    #[test]
    fn test_order_no_is_single_token() {
        let anchor = FieldAnchor::new("order number", "Order No:", FieldMode::Token);
        assert_eq!(anchor.text("Order No: 12345 extra text"), Ok("12345".to_string()));
    }

    #[test]
    fn test_line_mode_stops_at_newline() {
        let anchor = FieldAnchor::new("season", "Season:", FieldMode::Line);
        assert_eq!(anchor.text(HEADER), Ok("1-2024".to_string()));
    }

    #[test]
    fn test_label_at_line_end_reads_next_line() {
        let anchor = FieldAnchor::new("sales mode", "Sales Mode:", FieldMode::Line);
        assert_eq!(anchor.text("Sales Mode:\n  Solid \nnext"), Ok("Solid".to_string()));
    }

    #[test]
    fn test_integer_mode() {
        let anchor = FieldAnchor::new("number of pieces", "No of Pieces:", FieldMode::Integer);
        assert_eq!(anchor.integer(HEADER), Ok(1200));
        assert_eq!(anchor.integer("No of Pieces: -5"), Ok(-5));
        assert_eq!(
            anchor.integer("No of Pieces: 1,200"),
            Err(ExtractionError::Parse {
                field: "number of pieces".to_string(),
                value: "1,200".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_label() {
        let anchor = FieldAnchor::new("season", "Season:", FieldMode::Line);
        assert!(matches!(
            anchor.text("nothing to see"),
            Err(ExtractionError::MissingAnchor { .. })
        ));
    }

    #[test]
    fn test_static_fields_all_present() {
        let mut warnings = Vec::new();
        let fields = StaticFieldAnchors::default().extract(HEADER, &mut warnings);

        assert!(warnings.is_empty());
        assert_eq!(
            fields,
            StaticFields {
                order_no: Some("12345".to_string()),
                product_description: Some("Knitted Jumper".to_string()),
                season: Some("1-2024".to_string()),
                type_of_construction: Some("Knitted".to_string()),
                no_of_pieces: Some(1200),
                sales_mode: Some("Set".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_field_does_not_block_others() {
        let text = "Order No: 777\nNo of Pieces: many\nSales Mode: Single Pack";
        let mut warnings = Vec::new();
        let fields = StaticFieldAnchors::default().extract(text, &mut warnings);

        assert_eq!(fields.order_no.as_deref(), Some("777"));
        assert_eq!(fields.sales_mode.as_deref(), Some("Single Pack"));
        assert_eq!(fields.product_description, None);
        assert_eq!(fields.no_of_pieces, None);
        assert_eq!(warnings.len(), 4);
    }
}
