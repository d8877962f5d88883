//! OpenRouteService request models

use domain::{GeoLocation, TravelMode};
use serde::{Deserialize, Serialize};

/// Directions profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    /// Regular bike
    #[serde(rename = "cycling-regular")]
    CyclingRegular,
    /// Pedestrian
    #[serde(rename = "foot-walking")]
    FootWalking,
}

impl Profile {
    /// Path segment of the profile
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CyclingRegular => "cycling-regular",
            Self::FootWalking => "foot-walking",
        }
    }
}

impl From<TravelMode> for Profile {
    fn from(mode: TravelMode) -> Self {
        match mode {
            TravelMode::Cycling => Self::CyclingRegular,
            TravelMode::Walking => Self::FootWalking,
        }
    }
}

/// Body of `POST /v2/directions/{profile}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionsRequest {
    /// Waypoints as `[longitude, latitude]`
    pub coordinates: Vec<[f64; 2]>,
}

impl DirectionsRequest {
    /// Request from one point to another
    #[must_use]
    pub fn between(from: &GeoLocation, to: &GeoLocation) -> Self {
        Self {
            coordinates: vec![
                [from.longitude(), from.latitude()],
                [to.longitude(), to.latitude()],
            ],
        }
    }
}

/// Error body returned by the API on failure
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ErrorDetail {
    Message { message: String },
    Text(String),
}

impl ErrorDetail {
    pub fn into_message(self) -> String {
        match self {
            Self::Message { message } | Self::Text(message) => message,
        }
    }
}
