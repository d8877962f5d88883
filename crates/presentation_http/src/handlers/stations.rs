//! Bike station handler

use axum::{
    Json,
    extract::{Query, State},
};
use domain::BikeStation;
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Message for a missing or blank `city`
pub const MISSING_CITY: &str = "Missing required query parameter: city.";

/// `?city=` parameter
#[derive(Debug, Default, Deserialize)]
pub struct StationQuery {
    pub city: Option<String>,
}

/// Stations of one city's network
#[instrument(skip(state))]
pub async fn list_stations(
    State(state): State<AppState>,
    Query(query): Query<StationQuery>,
) -> Result<Json<Vec<BikeStation>>, ApiError> {
    let city = query
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::BadRequest(MISSING_CITY.to_string()))?;

    Ok(Json(state.stations.list_stations(city).await?))
}
