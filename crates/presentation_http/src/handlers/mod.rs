//! HTTP request handlers

pub mod health;
pub mod itinerary;
pub mod places;
pub mod stations;

use axum::http::Uri;
use tracing::debug;

use crate::error::ApiError;

/// Message for an unknown path
pub const ENDPOINT_INVALID: &str = "Endpoint Invalid.";

/// Fallback for unknown paths
pub async fn fallback(uri: Uri) -> ApiError {
    debug!(%uri, "Unknown endpoint");
    ApiError::NotFound(ENDPOINT_INVALID.to_string())
}
