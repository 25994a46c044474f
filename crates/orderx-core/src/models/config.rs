//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the orderx pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderxConfig {
    /// Field labels and section boundaries.
    pub anchors: AnchorConfig,

    /// Extraction behaviour.
    pub extraction: ExtractionConfig,

    /// Workbook output.
    pub output: OutputConfig,
}

/// Literal phrases used to locate fields and sections in page text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub order_no: String,
    pub product_description: String,
    pub season: String,
    pub type_of_construction: String,
    pub no_of_pieces: String,
    pub sales_mode: String,

    /// Phrase opening the pricing table.
    pub price_start: String,

    /// Phrase closing the pricing table.
    pub price_end: String,

    /// Token separating a price from its country codes.
    pub currency_marker: String,

    /// Phrase opening the delivery schedule.
    pub delivery_start: String,

    /// Phrase closing the delivery schedule.
    pub delivery_end: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            order_no: "Order No:".to_string(),
            product_description: "Product Description:".to_string(),
            season: "Season:".to_string(),
            type_of_construction: "Type of Construction:".to_string(),
            no_of_pieces: "No of Pieces:".to_string(),
            sales_mode: "Sales Mode:".to_string(),
            price_start: "Invoice Average Price Country".to_string(),
            price_end: "By accepting and performing under this Order, the Supplier acknowledges:"
                .to_string(),
            currency_marker: "USD".to_string(),
            delivery_start: "Time of Delivery Planning Markets Quantity % Total Qty".to_string(),
            delivery_end: "Total:".to_string(),
        }
    }
}

/// Extraction behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Page to read from each PDF (1-indexed).
    pub page: u32,

    /// Country codes accepted in the delivery schedule.
    ///
    /// Empty accepts every uppercase token followed by a parenthesis.
    pub country_allow_list: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            page: 1,
            country_allow_list: Vec::new(),
        }
    }
}

/// Workbook output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Workbook written when no output path is given.
    pub default_path: PathBuf,

    /// Font applied to every cell.
    pub font_name: String,

    /// Font size in points.
    pub font_size: f64,

    /// Extra width added to the widest value of each column.
    pub column_padding: f64,

    /// Longest sheet name the workbook format accepts.
    pub max_sheet_name_len: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from("output.xlsx"),
            font_name: "Calibri".to_string(),
            font_size: 12.0,
            column_padding: 1.0,
            max_sheet_name_len: 31,
        }
    }
}

impl OrderxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
