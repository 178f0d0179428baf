//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Annotator failed to process the text
    #[error("Annotation error: {0}")]
    Annotation(String),

    /// Date resolver failed (distinct from "no date recognized")
    #[error("Date resolution error: {0}")]
    DateResolution(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_error_message() {
        let err = ApplicationError::Annotation("matcher unavailable".to_string());
        assert_eq!(err.to_string(), "Annotation error: matcher unavailable");
    }

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError =
            DomainError::ValidationError("empty term".to_string()).into();
        assert_eq!(err.to_string(), "Validation failed: empty term");
    }

    #[test]
    fn date_resolution_error_message() {
        let err = ApplicationError::DateResolution("clock skew".to_string());
        assert_eq!(err.to_string(), "Date resolution error: clock skew");
    }
}
