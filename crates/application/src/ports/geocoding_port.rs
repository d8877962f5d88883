//! Geocoding service port
//!
//! Forward and reverse geocoding. Adapters in the infrastructure layer
//! implement this port on top of a geocoding API.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A place returned by forward geocoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSuggestion {
    /// Full human-readable place name
    pub display_name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl PlaceSuggestion {
    /// Create a suggestion
    pub fn new(display_name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            display_name: display_name.into(),
            latitude,
            longitude,
        }
    }

    /// Position of the place
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude, self.longitude)
    }
}

/// Port for geocoding lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve the city name at a coordinate
    ///
    /// Returns `ApplicationError::NotFound` when the provider reports no
    /// city, municipality, town or village for the location.
    async fn reverse_geocode(&self, location: &GeoLocation) -> Result<String, ApplicationError>;

    /// Free-text place search
    async fn search(&self, query: &str) -> Result<Vec<PlaceSuggestion>, ApplicationError>;
}
