//! API error handling
//!
//! Every error body has the shape `{ error, code, details? }`. The `error`
//! text is the message clients display; `details` carries the cause when
//! one is worth reporting.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Generic message for unexpected failures
pub const INTERNAL_ERROR: &str = "An internal error occurred";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("{message}")]
    Internal {
        message: String,
        details: Option<String>,
    },
}

impl ApiError {
    /// Internal error with a client-facing message and an optional cause
    pub fn internal(message: impl Into<String>, details: Option<String>) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, error, details) = match self {
            Self::BadRequest(msg) => ("bad_request", msg, None),
            Self::NotFound(msg) => ("not_found", msg, None),
            Self::BadGateway(msg) => ("bad_gateway", msg, None),
            Self::Internal { message, details } => ("internal_error", message, details),
        };

        let body = ErrorResponse {
            error,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::InvalidInput(msg) => Self::BadRequest(msg),
            ApplicationError::NotFound(msg) => Self::NotFound(msg),
            ApplicationError::UpstreamUnavailable(msg)
            | ApplicationError::MalformedUpstreamResponse(msg) => Self::BadGateway(msg),
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                Self::internal(INTERNAL_ERROR, Some(msg))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_bad_request_message() {
        let err = ApiError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_internal_message() {
        let err = ApiError::internal("Something broke.", None);
        assert_eq!(err.to_string(), "Something broke.");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_response_serialization() {
        let resp = ErrorResponse {
            error: "Bad request".to_string(),
            code: "bad_request".to_string(),
            details: None,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("code"));
        assert!(!json.contains("details"));
    }

    #[test]
    fn not_found_converts() {
        let result: ApiError = ApplicationError::NotFound("No city".to_string()).into();
        assert!(matches!(result, ApiError::NotFound(_)));
    }

    #[test]
    fn upstream_failures_convert_to_bad_gateway() {
        let result: ApiError = ApplicationError::UpstreamUnavailable("down".to_string()).into();
        assert_eq!(result.status(), StatusCode::BAD_GATEWAY);

        let result: ApiError =
            ApplicationError::MalformedUpstreamResponse("no routes".to_string()).into();
        assert_eq!(result.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn invalid_input_converts_to_bad_request() {
        let result: ApiError = ApplicationError::InvalidInput("blank".to_string()).into();
        assert!(matches!(result, ApiError::BadRequest(msg) if msg == "blank"));
    }

    #[test]
    fn internal_keeps_cause_in_details() {
        let result: ApiError = ApplicationError::Internal("boom".to_string()).into();
        match result {
            ApiError::Internal { message, details } => {
                assert_eq!(message, INTERNAL_ERROR);
                assert_eq!(details.as_deref(), Some("boom"));
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn into_response_status() {
        let response = ApiError::NotFound("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
