//! Entity/POS annotator port
//!
//! Defines the interface for named-entity recognition and POS tagging.

use async_trait::async_trait;
use domain::Annotation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for text annotation
///
/// Implementations hold their model as read-only state built once at
/// startup and must be safe for concurrent use.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AnnotatorPort: Send + Sync {
    /// Annotate a text with entities and POS-tagged tokens
    ///
    /// Both output sequences are in text order. Empty input yields an
    /// empty annotation, not an error.
    async fn annotate(&self, text: &str) -> Result<Annotation, ApplicationError>;

    /// Whether the annotator model is loaded and usable
    async fn is_ready(&self) -> bool;
}
