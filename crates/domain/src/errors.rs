//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A provider document lacks a field the domain reads
    #[error("Malformed route document: missing {0}")]
    MalformedDocument(String),

    /// Unknown travel mode name
    #[error("Invalid travel mode: {0}")]
    InvalidTravelMode(String),

    /// Unknown distance method name
    #[error("Invalid distance method: {0}")]
    InvalidDistanceMethod(String),
}

impl DomainError {
    /// Create a malformed document error for a JSON path
    pub fn missing(path: impl Into<String>) -> Self {
        Self::MalformedDocument(path.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_creates_malformed_document() {
        let err = DomainError::missing("routes[0].summary");
        match err {
            DomainError::MalformedDocument(path) => assert_eq!(path, "routes[0].summary"),
            _ => unreachable!("Expected MalformedDocument error"),
        }
    }

    #[test]
    fn malformed_document_message() {
        let err = DomainError::missing("routes");
        assert_eq!(err.to_string(), "Malformed route document: missing routes");
    }

    #[test]
    fn invalid_travel_mode_message() {
        let err = DomainError::InvalidTravelMode("driving".to_string());
        assert_eq!(err.to_string(), "Invalid travel mode: driving");
    }
}
