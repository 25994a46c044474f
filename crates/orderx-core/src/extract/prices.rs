//! Invoice average price table.
//!
//! Each priced line reads `<price> <currency> <code>, <code>, ...`, for
//! example `12.50 USD GB, FR, DE`.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::config::AnchorConfig;
use crate::models::order::PriceEntry;

use super::{SectionAnchor, SectionParser};

/// Parser for the country/price table.
#[derive(Debug, Clone)]
pub struct PriceTableParser {
    section: SectionAnchor,
    currency_marker: String,
}

impl PriceTableParser {
    pub fn new(section: SectionAnchor, currency_marker: impl Into<String>) -> Self {
        Self {
            section,
            currency_marker: currency_marker.into(),
        }
    }

    pub fn from_config(anchors: &AnchorConfig) -> Self {
        Self::new(
            SectionAnchor::new("price table", &anchors.price_start, &anchors.price_end),
            &anchors.currency_marker,
        )
    }

    /// Parse one table line into one entry per country code.
    pub fn parse_line(&self, line: &str) -> Vec<PriceEntry> {
        let (price, codes) = match line.trim().split_once(self.currency_marker.as_str()) {
            Some((before, after)) => (parse_price(before), split_codes(after)),
            None => (None, Vec::new()),
        };

        if codes.is_empty() {
            return vec![PriceEntry { code: None, price }];
        }

        codes
            .into_iter()
            .map(|code| PriceEntry {
                code: Some(code),
                price,
            })
            .collect()
    }
}

impl Default for PriceTableParser {
    fn default() -> Self {
        Self::from_config(&AnchorConfig::default())
    }
}

impl SectionParser for PriceTableParser {
    type Entry = PriceEntry;

    fn section(&self) -> &SectionAnchor {
        &self.section
    }

    fn parse_slice(&self, slice: &str) -> Vec<PriceEntry> {
        slice
            .lines()
            .filter(|line| !line.trim().is_empty())
            .flat_map(|line| self.parse_line(line))
            .collect()
    }
}

fn parse_price(s: &str) -> Option<Decimal> {
    Decimal::from_str(s.trim()).ok()
}

fn split_codes(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_uppercase)
        .collect()
}
