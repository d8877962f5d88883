//! Distance estimation between coordinates
//!
//! Used only to rank candidate bike stations within one city, never to
//! announce a trip distance. Both formulas return meters.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Earth's mean radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Formula used to rank candidate stations by distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMethod {
    /// Planar approximation, cheap and accurate at city scale
    Equirectangular,
    /// Great-circle distance
    #[default]
    Haversine,
}

impl DistanceMethod {
    /// Distance in meters between two coordinates using this method
    #[must_use]
    pub fn distance(self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        match self {
            Self::Equirectangular => estimate_distance(lat1, lon1, lat2, lon2),
            Self::Haversine => haversine_distance(lat1, lon1, lat2, lon2),
        }
    }
}

impl fmt::Display for DistanceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equirectangular => write!(f, "equirectangular"),
            Self::Haversine => write!(f, "haversine"),
        }
    }
}

impl FromStr for DistanceMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "equirectangular" | "planar" => Ok(Self::Equirectangular),
            "haversine" => Ok(Self::Haversine),
            other => Err(DomainError::InvalidDistanceMethod(other.to_string())),
        }
    }
}

/// Approximate distance in meters using an equirectangular projection
///
/// The longitude delta is scaled by the cosine of the mean latitude, then the
/// two planar offsets are combined with the Euclidean norm. Errors grow with
/// distance and towards the poles.
#[must_use]
pub fn estimate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();
    let mean_lat = ((lat1 + lat2) / 2.0).to_radians();

    let x = delta_lon * mean_lat.cos();
    let y = delta_lat;

    x.hypot(y) * EARTH_RADIUS_M
}

/// Great-circle distance in meters using the Haversine formula
#[must_use]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (phi1.cos() * phi2.cos()).mul_add(
        (delta_lambda / 2.0).sin().powi(2),
        (delta_phi / 2.0).sin().powi(2),
    );
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
