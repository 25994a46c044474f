//! Regex patterns for purchase-order extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Delivery date as printed in the schedule: "05 Jan, 2024"
    pub static ref DELIVERY_DATE: Regex = Regex::new(
        r"\d{2} [A-Za-z]{3}, \d{4}"
    ).unwrap();

    // Country code in front of a parenthesized market annotation: "GB (UK Online)"
    pub static ref CODE_BEFORE_PAREN: Regex = Regex::new(
        r"([A-Z]+)\s*\("
    ).unwrap();
}

/// `chrono` format of [`DELIVERY_DATE`] matches.
pub const DELIVERY_DATE_FORMAT: &str = "%d %b, %Y";
