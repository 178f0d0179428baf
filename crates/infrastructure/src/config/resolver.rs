//! Date resolver configuration.

use application::ports::DatePreference;
use serde::{Deserialize, Serialize};

use super::default_true;

/// Date resolution settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Resolve ambiguous dates to the nearest future occurrence
    #[serde(default = "default_true")]
    pub prefer_future: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { prefer_future: true }
    }
}

impl ResolverConfig {
    /// The date preference implied by this configuration
    #[must_use]
    pub const fn preference(&self) -> DatePreference {
        if self.prefer_future {
            DatePreference::Future
        } else {
            DatePreference::Past
        }
    }
}
