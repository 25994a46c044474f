//! Bounded slices of text between two anchor phrases.

use crate::error::ExtractionError;

use super::Result;

/// A section of the page delimited by a start and an end phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionAnchor {
    /// Name used in diagnostics.
    pub name: &'static str,
    pub start: String,
    pub end: String,
}

impl SectionAnchor {
    pub fn new(name: &'static str, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            name,
            start: start.into(),
            end: end.into(),
        }
    }

    /// Text strictly between the first `start` and the first `end` that
    /// follows it, trimmed.
    ///
    /// An `end` that only occurs before `start` is treated as missing.
    pub fn slice<'t>(&self, text: &'t str) -> Result<&'t str> {
        let begin = text
            .find(&self.start)
            .ok_or_else(|| self.missing(&self.start))?
            + self.start.len();

        let rest = &text[begin..];
        let end = rest.find(&self.end).ok_or_else(|| self.missing(&self.end))?;

        Ok(rest[..end].trim())
    }

    fn missing(&self, anchor: &str) -> ExtractionError {
        ExtractionError::MissingAnchor {
            field: self.name.to_string(),
            anchor: anchor.to_string(),
        }
    }
}
