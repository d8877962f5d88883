//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::distance::DistanceMethod;

/// A geographic location with latitude and longitude in WGS84 degrees
///
/// Values are not range-checked: coordinates are forwarded to providers as
/// received, and providers decide what to make of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

impl GeoLocation {
    /// Create a new location
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Distance to another location in meters
    #[must_use]
    pub fn distance_to(&self, other: &Self, method: DistanceMethod) -> f64 {
        method.distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }

    /// Stable textual form used in cache keys
    ///
    /// Uses the shortest round-trip representation so that two equal
    /// coordinates always produce the same key.
    #[must_use]
    pub fn key_fragment(&self) -> String {
        format!("{}|{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Common locations for defaults and tests
impl GeoLocation {
    /// Paris, France
    #[must_use]
    pub const fn paris() -> Self {
        Self::new(48.8566, 2.3522)
    }

    /// Lyon, France
    #[must_use]
    pub const fn lyon() -> Self {
        Self::new(45.7640, 4.8357)
    }
}
