//! Purchase-order data models.
//!
//! Every extracted value is an `Option`: `None` is the "unavailable"
//! sentinel. The literal [`UNAVAILABLE`] only appears once a value is
//! rendered as a [`Cell`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Text written in place of a value that could not be extracted.
pub const UNAVAILABLE: &str = "N/A";

/// Column headers of every output sheet, in order.
pub const HEADERS: [&str; 9] = [
    "Order No",
    "Country",
    "Product Description",
    "Season",
    "Type of Construction",
    "No. of Pieces",
    "Sales Mode",
    "Time of Delivery",
    "Invoice Average Price",
];

/// Document-level fields shared by every row of one order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticFields {
    /// Order number (single token after the label).
    pub order_no: Option<String>,

    /// Product description.
    pub product_description: Option<String>,

    /// Season code.
    pub season: Option<String>,

    /// Type of construction.
    pub type_of_construction: Option<String>,

    /// Number of pieces.
    pub no_of_pieces: Option<i64>,

    /// Sales mode.
    pub sales_mode: Option<String>,
}

/// One country code with its invoice average price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Uppercased country code.
    pub code: Option<String>,
    /// Unit price in the order currency.
    pub price: Option<Decimal>,
}

/// One country code with its planned delivery date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryEntry {
    pub date: Option<NaiveDate>,
    pub code: Option<String>,
}

/// One output row: static fields plus the per-country columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRow {
    pub order_no: Option<String>,
    pub country: Option<String>,
    pub product_description: Option<String>,
    pub season: Option<String>,
    pub type_of_construction: Option<String>,
    pub no_of_pieces: Option<i64>,
    pub sales_mode: Option<String>,
    pub time_of_delivery: Option<NaiveDate>,
    pub invoice_average_price: Option<Decimal>,
}

/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Decimal(Decimal),
    Unavailable,
}

impl Cell {
    fn text(value: &Option<String>) -> Self {
        value.clone().map(Cell::Text).unwrap_or(Cell::Unavailable)
    }

    /// Render the cell the way it reads in the sheet.
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Integer(n) => n.to_string(),
            Cell::Decimal(d) => d.to_string(),
            Cell::Unavailable => UNAVAILABLE.to_string(),
        }
    }
}

impl OrderRow {
    /// Build a row from the shared static fields and one country's values.
    pub fn new(
        fields: &StaticFields,
        price: &PriceEntry,
        time_of_delivery: Option<NaiveDate>,
    ) -> Self {
        Self {
            order_no: fields.order_no.clone(),
            country: price.code.clone(),
            product_description: fields.product_description.clone(),
            season: fields.season.clone(),
            type_of_construction: fields.type_of_construction.clone(),
            no_of_pieces: fields.no_of_pieces,
            sales_mode: fields.sales_mode.clone(),
            time_of_delivery,
            invoice_average_price: price.price,
        }
    }

    /// Cells in [`HEADERS`] order.
    pub fn cells(&self) -> [Cell; 9] {
        [
            Cell::text(&self.order_no),
            Cell::text(&self.country),
            Cell::text(&self.product_description),
            Cell::text(&self.season),
            Cell::text(&self.type_of_construction),
            self.no_of_pieces.map(Cell::Integer).unwrap_or(Cell::Unavailable),
            Cell::text(&self.sales_mode),
            self.time_of_delivery
                .map(|d| Cell::Text(d.format("%Y-%m-%d").to_string()))
                .unwrap_or(Cell::Unavailable),
            self.invoice_average_price
                .map(Cell::Decimal)
                .unwrap_or(Cell::Unavailable),
        ]
    }
}

/// All rows extracted from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTable {
    pub rows: Vec<OrderRow>,
}

impl OrderTable {
    pub fn new(rows: Vec<OrderRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Display width of each column: the widest rendered value, header
    /// included.
    pub fn column_widths(&self) -> [usize; 9] {
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells().iter()) {
                *width = (*width).max(cell.display().chars().count());
            }
        }
        widths
    }

    /// Render as a plain-text table.
    pub fn to_text(&self) -> String {
        let widths = self.column_widths();
        let mut output = String::new();

        let header: Vec<String> = HEADERS
            .iter()
            .zip(widths.iter())
            .map(|(h, w)| format!("{:<w$}", h, w = *w))
            .collect();
        output.push_str(header.join(" | ").trim_end());
        output.push('\n');

        for row in &self.rows {
            let line: Vec<String> = row
                .cells()
                .iter()
                .zip(widths.iter())
                .map(|(c, w)| format!("{:<w$}", c.display(), w = *w))
                .collect();
            output.push_str(line.join(" | ").trim_end());
            output.push('\n');
        }

        output
    }
}
