//! Date range value object

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive range of calendar dates
///
/// The interpreter never computes a genuine range: both endpoints always
/// carry the same resolved date. The invariant `from == to` is enforced
/// by construction — `single` is the only way to build a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    /// Create a degenerate range covering a single day
    #[must_use]
    pub const fn single(date: NaiveDate) -> Self {
        Self {
            from: date,
            to: date,
        }
    }

    /// Start of the range
    #[must_use]
    pub const fn from(&self) -> NaiveDate {
        self.from
    }

    /// End of the range
    #[must_use]
    pub const fn to(&self) -> NaiveDate {
        self.to
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from == self.to {
            write!(f, "{}", self.from.format("%Y-%m-%d"))
        } else {
            write!(
                f,
                "{}..{}",
                self.from.format("%Y-%m-%d"),
                self.to.format("%Y-%m-%d")
            )
        }
    }
}
