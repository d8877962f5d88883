//! Routing error types

use thiserror::Error;

/// Errors that can occur while computing a route
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the routing service failed
    #[error("Routing connection failed: {0}")]
    ConnectionFailed(String),

    /// Request was answered with a failure status
    #[error("Routing request failed: {status}: {message}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Provider error message, if any
        message: String,
    },

    /// Failed to parse the response, or it has no route
    #[error("Routing parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Routing rate limit exceeded")]
    RateLimitExceeded,

    /// Request timeout
    #[error("Routing request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}
