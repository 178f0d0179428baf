//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Entity label not part of the annotator taxonomy
    #[error("Unknown entity label: {0}")]
    UnknownEntityLabel(String),

    /// POS tag not part of the tagger taxonomy
    #[error("Unknown part-of-speech tag: {0}")]
    UnknownPosTag(String),

    /// Date range violates the single-date invariant
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_label_error_message() {
        let err = DomainError::UnknownEntityLabel("XYZ".to_string());
        assert_eq!(err.to_string(), "Unknown entity label: XYZ");
    }

    #[test]
    fn unknown_pos_tag_error_message() {
        let err = DomainError::UnknownPosTag("BLORP".to_string());
        assert_eq!(err.to_string(), "Unknown part-of-speech tag: BLORP");
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("empty term".to_string());
        assert_eq!(err.to_string(), "Validation failed: empty term");
    }
}
