//! Bike-share error types

use thiserror::Error;

/// Errors that can occur while fetching stations
#[derive(Debug, Error)]
pub enum BikeShareError {
    /// Connection to the station API failed
    #[error("Bike-share connection failed: {0}")]
    ConnectionFailed(String),

    /// Request was answered with a failure status
    #[error("Bike-share request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the station list
    #[error("Bike-share parse error: {0}")]
    ParseError(String),

    /// The API key was refused
    #[error("Bike-share API key rejected")]
    Unauthorized,

    /// Request timeout
    #[error("Bike-share request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}
