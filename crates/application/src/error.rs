//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Inference/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Invalid input supplied to a port
    #[error("Invalid input: {0}")]
    InvalidInput(String),

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
    fn error_messages() {
        assert_eq!(ApplicationError::RateLimited.to_string(), "Rate limit exceeded");
        assert_eq!(
            ApplicationError::ExternalService("HTTP 503".into()).to_string(),
            "External service error: HTTP 503"
        );
    }

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::not_found("City", "Atlantis").into();
        assert_eq!(
            err.to_string(),
            DomainError::not_found("City", "Atlantis").to_string()
        );
    }
}
