//! Query interpreter service
//!
//! Composes the annotator and the date resolver through the selection
//! rule chains. The interpreter never surfaces an error to its caller:
//! collaborator failures degrade to absent fields.

use std::sync::Arc;

use domain::{Annotation, DateRange, ExtractionResult};
use tracing::{debug, instrument, warn};

use crate::ports::{AnnotatorPort, DatePreference, DateResolverPort};
use crate::selection::{select_date_text, select_location};

/// Stateless per-request interpreter over two collaborators
///
/// Holds only shared read-only handles; one instance serves all requests
/// concurrently.
pub struct QueryInterpreter {
    annotator: Arc<dyn AnnotatorPort>,
    date_resolver: Arc<dyn DateResolverPort>,
    preference: DatePreference,
}

impl std::fmt::Debug for QueryInterpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryInterpreter")
            .field("preference", &self.preference)
            .finish_non_exhaustive()
    }
}

impl QueryInterpreter {
    /// Create an interpreter with the default future-biased preference
    #[must_use]
    pub fn new(
        annotator: Arc<dyn AnnotatorPort>,
        date_resolver: Arc<dyn DateResolverPort>,
    ) -> Self {
        Self::with_preference(annotator, date_resolver, DatePreference::Future)
    }

    /// Create an interpreter with an explicit date preference
    #[must_use]
    pub fn with_preference(
        annotator: Arc<dyn AnnotatorPort>,
        date_resolver: Arc<dyn DateResolverPort>,
        preference: DatePreference,
    ) -> Self {
        Self {
            annotator,
            date_resolver,
            preference,
        }
    }

    /// Interpret a free-text query into a location and a date range
    ///
    /// Infallible by contract: an annotator failure is treated as an
    /// empty annotation, a resolver failure as "no date recognized".
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn interpret(&self, query: &str) -> ExtractionResult {
        let annotation = match self.annotator.annotate(query).await {
            Ok(annotation) => annotation,
            Err(e) => {
                warn!(error = %e, "Annotator failed, continuing with empty annotation");
                Annotation::empty()
            },
        };

        let location = select_location(&annotation, query);
        let date_text = select_date_text(&annotation, query);
        debug!(
            location = location.as_deref().unwrap_or("<none>"),
            date_text = %date_text,
            "Selected candidates"
        );

        let dates = match self.date_resolver.resolve(&date_text, self.preference).await {
            Ok(resolved) => resolved.map(DateRange::single),
            Err(e) => {
                warn!(error = %e, "Date resolver failed, treating as unresolved");
                None
            },
        };

        ExtractionResult::new(location, dates)
    }

    /// Whether the underlying annotator model is loaded
    pub async fn is_ready(&self) -> bool {
        self.annotator.is_ready().await
    }
}
