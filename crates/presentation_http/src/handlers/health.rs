//! Health check handler

use axum::{Json, extract::State};
use infrastructure::ProxyCacheStats;
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<ProxyCacheStats>,
}

/// Liveness check with provider cache counters
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        cache: state.cache_stats(),
    })
}
