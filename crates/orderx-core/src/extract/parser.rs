//! Order parser combining field anchors and table parsers.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::models::config::OrderxConfig;
use crate::models::order::{DeliveryEntry, OrderTable, PriceEntry, StaticFields};

use super::{DeliveryTableParser, PriceTableParser, SectionParser, StaticFieldAnchors, join_rows};

/// Result of order extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Document-level fields.
    pub fields: StaticFields,
    /// Parsed price table, in page order.
    pub prices: Vec<PriceEntry>,
    /// Parsed delivery schedule, in page order.
    pub deliveries: Vec<DeliveryEntry>,
    /// Joined output rows.
    pub table: OrderTable,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Parser turning one page of order text into an [`OrderTable`].
#[derive(Debug, Clone)]
pub struct OrderParser {
    fields: StaticFieldAnchors,
    prices: PriceTableParser,
    deliveries: DeliveryTableParser,
}

impl OrderParser {
    /// Create a parser with the default anchors.
    pub fn new() -> Self {
        Self::from_config(&OrderxConfig::default())
    }

    pub fn from_config(config: &OrderxConfig) -> Self {
        Self {
            fields: StaticFieldAnchors::from_config(&config.anchors),
            prices: PriceTableParser::from_config(&config.anchors),
            deliveries: DeliveryTableParser::from_config(&config.anchors, &config.extraction),
        }
    }

    /// Parse order text. Never fails: missing pieces become `None` or
    /// empty tables, each with a warning.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("Parsing order from {} characters of text", text.len());

        let fields = self.fields.extract(text, &mut warnings);

        let prices = self.prices.parse(text).unwrap_or_else(|e| {
            warnings.push(e.to_string());
            Vec::new()
        });

        let deliveries = self.deliveries.parse(text).unwrap_or_else(|e| {
            warnings.push(e.to_string());
            Vec::new()
        });

        let table = OrderTable::new(join_rows(&fields, &prices, &deliveries));

        debug!(
            "Extracted {} price entries, {} delivery entries, {} rows",
            prices.len(),
            deliveries.len(),
            table.len()
        );

        ExtractionResult {
            fields,
            prices,
            deliveries,
            table,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for OrderParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::Cell;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    const ORDER: &str = "\
PURCHASE ORDER
Order No: 4711-02 Date of Order: 01 Dec, 2023
Product Description: Knitted Jumper
Season: 1-2024
Type of Construction: Knitted
No of Pieces: 1200
Sales Mode: Set
Invoice Average Price Country
10.00 USD GB
12.50 USD FR, DE
By accepting and performing under this Order, the Supplier acknowledges:
Terms and conditions apply.
Time of Delivery Planning Markets Quantity % Total Qty
05 Jan, 2024 OL GB (UK Online), FR (France) 600 50%
19 Jan, 2024 DE (Germany) 600 50%
Total: 1200 100%
";

    #[test]
    fn test_parse_full_order() {
        let result = OrderParser::new().parse(ORDER);
        let rows = &result.table.rows;

        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
        assert_eq!(result.prices.len(), 3);
        assert_eq!(rows.len(), 3);

        let countries: Vec<_> = rows.iter().map(|r| r.country.as_deref()).collect();
        assert_eq!(countries, vec![Some("GB"), Some("FR"), Some("DE")]);

        let dates: Vec<_> = rows.iter().map(|r| r.time_of_delivery).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 5),
                NaiveDate::from_ymd_opt(2024, 1, 5),
                NaiveDate::from_ymd_opt(2024, 1, 19),
            ]
        );

        for row in rows {
            assert_eq!(row.order_no.as_deref(), Some("4711-02"));
            assert_eq!(row.product_description.as_deref(), Some("Knitted Jumper"));
            assert_eq!(row.season.as_deref(), Some("1-2024"));
            assert_eq!(row.type_of_construction.as_deref(), Some("Knitted"));
            assert_eq!(row.no_of_pieces, Some(1200));
            assert_eq!(row.sales_mode.as_deref(), Some("Set"));
        }
        assert_eq!(rows[2].cells()[8], Cell::Decimal("12.50".parse().unwrap()));
    }

    #[test]
    fn test_parse_is_deterministic() {
        let parser = OrderParser::new();
        assert_eq!(parser.parse(ORDER).table, parser.parse(ORDER).table);
    }

    #[test]
    fn test_missing_price_section_yields_no_rows() {
        let text = ORDER.replace("Invoice Average Price Country", "Prices");
        let result = OrderParser::new().parse(&text);

        assert!(result.table.is_empty());
        assert_eq!(result.deliveries.len(), 3);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_missing_delivery_section_keeps_rows() {
        let text = ORDER.replace("Total: 1200", "Sum 1200");
        let result = OrderParser::new().parse(&text);

        assert_eq!(result.table.len(), 3);
        assert!(result.table.rows.iter().all(|r| r.time_of_delivery.is_none()));
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_missing_fields_degrade_individually() {
        let text = ORDER.replace("Season: 1-2024\n", "").replace("No of Pieces: 1200", "No of Pieces: n/a");
        let result = OrderParser::new().parse(&text);

        assert_eq!(result.table.len(), 3);
        assert_eq!(result.fields.season, None);
        assert_eq!(result.fields.no_of_pieces, None);
        assert_eq!(result.fields.sales_mode.as_deref(), Some("Set"));
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_codeless_price_takes_codeless_delivery_date() {
        let text = "\
Invoice Average Price Country
9.99 USD
By accepting and performing under this Order, the Supplier acknowledges:
Time of Delivery Planning Markets Quantity % Total Qty
05 Jan, 2024 1200 100%
Total: 1200
";
        let result = OrderParser::new().parse(text);

        assert_eq!(result.table.len(), 1);
        let row = &result.table.rows[0];
        assert_eq!(row.country, None);
        assert_eq!(row.time_of_delivery, NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(row.cells()[8], Cell::Decimal("9.99".parse().unwrap()));
    }

    #[test]
    fn test_negative_piece_count_is_kept() {
        let text = ORDER.replace("No of Pieces: 1200", "No of Pieces: -5");
        let result = OrderParser::new().parse(&text);

        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
        assert!(result.table.rows.iter().all(|r| r.no_of_pieces == Some(-5)));
        assert_eq!(result.table.rows[0].cells()[5].display(), "-5");
    }

    #[test]
    fn test_empty_text() {
        let result = OrderParser::new().parse("");
        assert!(result.table.is_empty());
        assert_eq!(result.warnings.len(), 8);
    }
}
