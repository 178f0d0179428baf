//! Natural-language date resolver port

use async_trait::async_trait;
use chrono::NaiveDate;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Directional preference for ambiguous date expressions
///
/// A bare weekday like "friday" can mean the last or the next one;
/// the preference decides which occurrence wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePreference {
    /// Resolve ambiguous dates to the nearest future occurrence
    #[default]
    Future,
    /// Resolve ambiguous dates to the nearest past occurrence
    Past,
}

/// Port for resolving natural-language date phrases
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DateResolverPort: Send + Sync {
    /// Resolve a date phrase into a calendar date
    ///
    /// Returns `Ok(None)` when the text carries no recognizable date;
    /// `Err` is reserved for infrastructure failure.
    async fn resolve(
        &self,
        text: &str,
        preference: DatePreference,
    ) -> Result<Option<NaiveDate>, ApplicationError>;
}
