//! Itinerary handlers

use application::{ItineraryResponse, extract_instructions};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::GeoLocation;
use serde::Deserialize;
use tracing::{instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Message for a missing or blank parameter
pub const MISSING_PARAMETERS: &str = "Missing required query parameters.";

/// Message for a parameter that is not a number
pub const INVALID_NUMBERS: &str = "Query parameters must be valid numbers.";

/// Mode value that requests a bike itinerary
pub const CYCLING_MODE: &str = "cycling";

/// Raw itinerary query string
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryQuery {
    pub origin_lat: Option<String>,
    pub origin_lon: Option<String>,
    pub destination_lat: Option<String>,
    pub destination_lon: Option<String>,
    pub mode: Option<String>,
}

/// Validated itinerary request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItineraryRequest {
    pub origin: GeoLocation,
    pub destination: GeoLocation,
    pub prefer_bike: bool,
}

pub(crate) fn required(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

pub(crate) fn coordinate(value: &str) -> Result<f64, ApiError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ApiError::BadRequest(INVALID_NUMBERS.to_string()))
}

impl ItineraryQuery {
    /// Check presence first, then numeric form
    ///
    /// # Errors
    ///
    /// `BadRequest` with [`MISSING_PARAMETERS`] or [`INVALID_NUMBERS`].
    pub fn validate(&self) -> Result<ItineraryRequest, ApiError> {
        let missing = || ApiError::BadRequest(MISSING_PARAMETERS.to_string());

        let origin_lat = required(self.origin_lat.as_ref()).ok_or_else(missing)?;
        let origin_lon = required(self.origin_lon.as_ref()).ok_or_else(missing)?;
        let destination_lat = required(self.destination_lat.as_ref()).ok_or_else(missing)?;
        let destination_lon = required(self.destination_lon.as_ref()).ok_or_else(missing)?;
        let mode = required(self.mode.as_ref()).ok_or_else(missing)?;

        Ok(ItineraryRequest {
            origin: GeoLocation::new(coordinate(origin_lat)?, coordinate(origin_lon)?),
            destination: GeoLocation::new(
                coordinate(destination_lat)?,
                coordinate(destination_lon)?,
            ),
            prefer_bike: mode == CYCLING_MODE,
        })
    }
}

async fn compose(state: &AppState, request: ItineraryRequest) -> ItineraryResponse {
    state
        .itinerary_service
        .compose_itinerary(request.origin, request.destination, request.prefer_bike)
        .await
}

/// Compose an itinerary
///
/// A failed composition answers 502 with the `{ error, details }` document.
#[instrument(skip(state))]
pub async fn get_itinerary(
    State(state): State<AppState>,
    Query(query): Query<ItineraryQuery>,
) -> Result<Response, ApiError> {
    let request = query.validate()?;
    let response = compose(&state, request).await;

    let status = if response.is_failure() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    Ok((status, Json(response)).into_response())
}

/// Turn-by-turn instructions of a composed itinerary
#[instrument(skip(state))]
pub async fn get_instructions(
    State(state): State<AppState>,
    Query(query): Query<ItineraryQuery>,
) -> Result<Response, ApiError> {
    let request = query.validate()?;

    match compose(&state, request).await {
        ItineraryResponse::Itinerary(itinerary) => {
            let instructions = extract_instructions(&itinerary).map_err(|e| {
                warn!(error = %e, "Instruction extraction failed");
                ApiError::from(e)
            })?;
            Ok(Json(instructions).into_response())
        },
        failure @ ItineraryResponse::Failure(_) => {
            Ok((StatusCode::BAD_GATEWAY, Json(failure)).into_response())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(values: [Option<&str>; 5]) -> ItineraryQuery {
        let [origin_lat, origin_lon, destination_lat, destination_lon, mode] =
            values.map(|v| v.map(str::to_string));
        ItineraryQuery {
            origin_lat,
            origin_lon,
            destination_lat,
            destination_lon,
            mode,
        }
    }

    fn bad_request_message(err: ApiError) -> String {
        match err {
            ApiError::BadRequest(msg) => msg,
            other => panic!("expected bad request, got {other:?}"),
        }
    }

    #[test]
    fn valid_cycling_query() {
        let request = query([
            Some("48.8566"),
            Some("2.3522"),
            Some("45.764"),
            Some("4.8357"),
            Some("cycling"),
        ])
        .validate()
        .unwrap();

        assert_eq!(request.origin, GeoLocation::paris());
        assert_eq!(request.destination, GeoLocation::lyon());
        assert!(request.prefer_bike);
    }

    #[test]
    fn any_other_mode_is_walking() {
        for mode in ["walking", "Cycling", "car"] {
            let request = query([Some("1"), Some("2"), Some("3"), Some("4"), Some(mode)])
                .validate()
                .unwrap();
            assert!(!request.prefer_bike, "{mode}");
        }
    }

    #[test]
    fn missing_or_blank_parameter() {
        let err = query([Some("1"), None, Some("3"), Some("4"), Some("cycling")])
            .validate()
            .unwrap_err();
        assert_eq!(bad_request_message(err), MISSING_PARAMETERS);

        let err = query([Some("1"), Some("2"), Some("3"), Some("4"), Some("  ")])
            .validate()
            .unwrap_err();
        assert_eq!(bad_request_message(err), MISSING_PARAMETERS);
    }

    #[test]
    fn missing_takes_precedence_over_invalid() {
        let err = query([Some("abc"), Some("2"), Some("3"), None, Some("cycling")])
            .validate()
            .unwrap_err();
        assert_eq!(bad_request_message(err), MISSING_PARAMETERS);
    }

    #[test]
    fn non_numeric_parameter() {
        for bad in ["abc", "NaN", "inf", "1,5"] {
            let err = query([Some("1"), Some("2"), Some(bad), Some("4"), Some("cycling")])
                .validate()
                .unwrap_err();
            assert_eq!(bad_request_message(err), INVALID_NUMBERS, "{bad}");
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let request = query([Some(" 1.5 "), Some("2"), Some("3"), Some("4"), Some(" cycling ")])
            .validate()
            .unwrap();
        assert!((request.origin.latitude() - 1.5).abs() < f64::EPSILON);
        assert!(request.prefer_bike);
    }
}
