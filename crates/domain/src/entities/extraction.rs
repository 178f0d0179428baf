//! Extraction result returned by the query interpreter

use serde::{Deserialize, Serialize};

use crate::value_objects::DateRange;

/// Structured result of interpreting one free-text query
///
/// Built once per request and never mutated afterwards. Absence of a
/// field is the normal "nothing found" outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Location string selected from the annotation, if any
    pub location: Option<String>,
    /// Resolved date range, if any; both endpoints carry the same date
    pub dates: Option<DateRange>,
}

impl ExtractionResult {
    /// Create a result from the selected location and resolved dates
    #[must_use]
    pub const fn new(location: Option<String>, dates: Option<DateRange>) -> Self {
        Self { location, dates }
    }

    /// A result with nothing extracted
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether neither a location nor a date was found
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.location.is_none() && self.dates.is_none()
    }
}
