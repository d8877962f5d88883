//! Bike-share station snapshot

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// A bike-share station as reported by the provider at lookup time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BikeStation {
    /// Station name
    pub name: String,
    /// Bikes ready to be taken
    pub bikes_available: u32,
    /// Total docking stands
    pub bike_stands: u32,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl BikeStation {
    /// Create a station snapshot
    pub fn new(
        name: impl Into<String>,
        bikes_available: u32,
        bike_stands: u32,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            bikes_available,
            bike_stands,
            latitude,
            longitude,
        }
    }

    /// A trip can start here
    #[must_use]
    pub const fn has_available_bike(&self) -> bool {
        self.bikes_available > 0
    }

    /// A bike can be returned here (at least one free dock)
    #[must_use]
    pub const fn has_free_stand(&self) -> bool {
        self.bike_stands > self.bikes_available
    }

    /// Station position
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude, self.longitude)
    }
}
