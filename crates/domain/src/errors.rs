//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Value could not be parsed into a domain type
    #[error("Invalid {kind}: {value}")]
    InvalidValue { kind: &'static str, value: String },
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_creates_correct_error() {
        let err = DomainError::not_found("City", "Atlantis");
        match err {
            DomainError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "City");
                assert_eq!(id, "Atlantis");
            },
            _ => unreachable!("Expected NotFound error"),
        }
    }

    #[test]
    fn not_found_error_message_is_correct() {
        let err = DomainError::not_found("City", "Atlantis");
        assert_eq!(err.to_string(), "City not found: Atlantis");
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("too many days".to_string());
        assert_eq!(err.to_string(), "Validation failed: too many days");
    }

    #[test]
    fn invalid_value_error_message() {
        let err = DomainError::invalid_value("unit", "kelvin");
        assert_eq!(err.to_string(), "Invalid unit: kelvin");
    }
}
