//! Annotator lexicon configuration.

use serde::{Deserialize, Serialize};

/// Extra gazetteer terms merged into the built-in lexicon at startup
///
/// Terms are matched case-insensitively; multi-word terms are allowed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotatorConfig {
    /// Additional geo-political entity names (cities, countries, states)
    #[serde(default)]
    pub extra_gpe: Vec<String>,

    /// Additional non-GPE location names (regions, waters, mountains)
    #[serde(default)]
    pub extra_loc: Vec<String>,

    /// Additional facility names (airports, landmarks, venues)
    #[serde(default)]
    pub extra_fac: Vec<String>,
}

impl AnnotatorConfig {
    /// Whether any extensions are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extra_gpe.is_empty() && self.extra_loc.is_empty() && self.extra_fac.is_empty()
    }
}
