//! Delivery schedule table.
//!
//! Schedule lines carry a planned date and the markets it applies to, e.g.
//! `05 Jan, 2024 OL GB (UK Online), FR (France) 600 50%`.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::config::{AnchorConfig, ExtractionConfig};
use crate::models::order::DeliveryEntry;

use super::patterns::{CODE_BEFORE_PAREN, DELIVERY_DATE, DELIVERY_DATE_FORMAT};
use super::{SectionAnchor, SectionParser};

/// Parser for the delivery schedule.
#[derive(Debug, Clone)]
pub struct DeliveryTableParser {
    section: SectionAnchor,
    allow_list: Vec<String>,
}

impl DeliveryTableParser {
    pub fn new(section: SectionAnchor) -> Self {
        Self {
            section,
            allow_list: Vec::new(),
        }
    }

    /// Only accept the given country codes. An empty list accepts all.
    pub fn with_allow_list(mut self, codes: Vec<String>) -> Self {
        self.allow_list = codes.into_iter().map(|c| c.to_uppercase()).collect();
        self
    }

    pub fn from_config(anchors: &AnchorConfig, extraction: &ExtractionConfig) -> Self {
        Self::new(SectionAnchor::new(
            "delivery schedule",
            &anchors.delivery_start,
            &anchors.delivery_end,
        ))
        .with_allow_list(extraction.country_allow_list.clone())
    }

    /// Parse one schedule line into one entry per country code found.
    pub fn parse_line(&self, line: &str) -> Vec<DeliveryEntry> {
        let date = parse_delivery_date(line);
        let codes: Vec<&str> = country_codes(line)
            .into_iter()
            .filter(|code| self.accepts(code))
            .collect();

        if codes.is_empty() {
            return vec![DeliveryEntry { date, code: None }];
        }

        codes
            .into_iter()
            .map(|code| DeliveryEntry {
                date,
                code: Some(code.to_string()),
            })
            .collect()
    }

    fn accepts(&self, code: &str) -> bool {
        if self.allow_list.is_empty() || self.allow_list.iter().any(|c| c == code) {
            return true;
        }
        debug!("Ignoring unknown country code {:?} in delivery schedule", code);
        false
    }
}

impl Default for DeliveryTableParser {
    fn default() -> Self {
        Self::from_config(&AnchorConfig::default(), &ExtractionConfig::default())
    }
}

impl SectionParser for DeliveryTableParser {
    type Entry = DeliveryEntry;

    fn section(&self) -> &SectionAnchor {
        &self.section
    }

    fn parse_slice(&self, slice: &str) -> Vec<DeliveryEntry> {
        slice.lines().flat_map(|line| self.parse_line(line)).collect()
    }
}

/// First `DD Mon, YYYY` date on the line, if it is a real calendar date.
pub fn parse_delivery_date(line: &str) -> Option<NaiveDate> {
    let found = DELIVERY_DATE.find(line)?;
    NaiveDate::parse_from_str(found.as_str(), DELIVERY_DATE_FORMAT).ok()
}

/// Every uppercase run directly preceding a `(`, in order of appearance.
pub fn country_codes(line: &str) -> Vec<&str> {
    CODE_BEFORE_PAREN
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}
