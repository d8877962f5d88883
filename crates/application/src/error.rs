//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(DomainError),

    /// A provider could not be reached, timed out or answered with a failure status
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// A provider answered but had nothing for the request
    #[error("Not found: {0}")]
    NotFound(String),

    /// A provider answered with a body missing the fields we read
    #[error("Malformed upstream response: {0}")]
    MalformedUpstreamResponse(String),

    /// Caller input rejected before any provider call
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MalformedDocument(_) => Self::MalformedUpstreamResponse(err.to_string()),
            other => Self::Domain(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_document_maps_to_malformed_upstream() {
        let err: ApplicationError = DomainError::missing("routes[0]").into();
        assert!(matches!(err, ApplicationError::MalformedUpstreamResponse(_)));
        assert!(err.to_string().contains("routes[0]"));
    }

    #[test]
    fn other_domain_errors_stay_domain() {
        let err: ApplicationError = DomainError::InvalidTravelMode("car".to_string()).into();
        assert!(matches!(err, ApplicationError::Domain(_)));
        assert_eq!(err.to_string(), "Invalid travel mode: car");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ApplicationError::UpstreamUnavailable("HTTP 503".into()).to_string(),
            "Upstream unavailable: HTTP 503"
        );
        assert_eq!(
            ApplicationError::NotFound("no city at 0,0".into()).to_string(),
            "Not found: no city at 0,0"
        );
    }
}
