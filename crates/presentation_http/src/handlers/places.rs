//! Geocoding handlers: raw search, reverse lookup and suggestions

use application::ports::PlaceSuggestion;
use axum::{
    Json,
    extract::{Query, State},
};
use domain::GeoLocation;
use serde::Deserialize;
use tracing::{instrument, warn};

use super::itinerary::{MISSING_PARAMETERS, coordinate, required};
use crate::{error::ApiError, state::AppState};

/// Message for a missing or blank `query`
pub const MISSING_QUERY: &str = "Missing required query parameter: query.";

/// Message for a failed suggestion lookup
pub const SUGGESTIONS_FAILED: &str = "An unexpected error occurred while fetching suggestions.";

/// `?query=` parameter
#[derive(Debug, Default, Deserialize)]
pub struct PlaceQuery {
    pub query: Option<String>,
}

impl PlaceQuery {
    fn text(&self) -> Result<&str, ApiError> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| ApiError::BadRequest(MISSING_QUERY.to_string()))
    }
}

/// `?lat=&lon=` parameters
#[derive(Debug, Default, Deserialize)]
pub struct ReverseQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl ReverseQuery {
    fn location(&self) -> Result<GeoLocation, ApiError> {
        let missing = || ApiError::BadRequest(MISSING_PARAMETERS.to_string());
        let lat = required(self.lat.as_ref()).ok_or_else(missing)?;
        let lon = required(self.lon.as_ref()).ok_or_else(missing)?;
        Ok(GeoLocation::new(coordinate(lat)?, coordinate(lon)?))
    }
}

/// Forward geocoding, unfiltered
#[instrument(skip(state))]
pub async fn geocode(
    State(state): State<AppState>,
    Query(query): Query<PlaceQuery>,
) -> Result<Json<Vec<PlaceSuggestion>>, ApiError> {
    let text = query.text()?;
    Ok(Json(state.geocoding.search(text).await?))
}

/// City name at a coordinate
#[instrument(skip(state))]
pub async fn reverse_geocode(
    State(state): State<AppState>,
    Query(query): Query<ReverseQuery>,
) -> Result<Json<String>, ApiError> {
    let location = query.location()?;
    Ok(Json(state.geocoding.reverse_geocode(&location).await?))
}

/// Place suggestions restricted to the configured country
#[instrument(skip(state))]
pub async fn suggestions(
    State(state): State<AppState>,
    Query(query): Query<PlaceQuery>,
) -> Result<Json<Vec<PlaceSuggestion>>, ApiError> {
    let text = query.text()?;

    state
        .suggestion_service
        .suggest(text)
        .await
        .map(Json)
        .map_err(|e| {
            warn!(error = %e, "Suggestion lookup failed");
            ApiError::internal(SUGGESTIONS_FAILED, Some(e.to_string()))
        })
}
