//! Purchase-order field extraction module.
//!
//! Page text has no stable schema, so every value is located by literal
//! anchors: [`FieldAnchor`] for labeled single values and [`SectionAnchor`]
//! for the pricing and delivery tables. Failures stay local to the field
//! or section that produced them.

pub mod anchor;
pub mod delivery;
mod parser;
pub mod patterns;
pub mod prices;
pub mod rows;
pub mod section;

pub use anchor::{FieldAnchor, FieldMode, StaticFieldAnchors};
pub use delivery::DeliveryTableParser;
pub use parser::{ExtractionResult, OrderParser};
pub use prices::PriceTableParser;
pub use rows::join_rows;
pub use section::SectionAnchor;

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for parsers of a table bounded by a [`SectionAnchor`].
pub trait SectionParser {
    /// The entry type produced per parsed item.
    type Entry;

    /// Anchors bounding the table.
    fn section(&self) -> &SectionAnchor;

    /// Parse the already-sliced table text.
    fn parse_slice(&self, slice: &str) -> Vec<Self::Entry>;

    /// Slice the table out of the full page text and parse it.
    fn parse(&self, text: &str) -> Result<Vec<Self::Entry>> {
        let slice = self.section().slice(text)?;
        Ok(self.parse_slice(slice))
    }
}
