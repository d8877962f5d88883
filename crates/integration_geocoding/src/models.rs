//! Nominatim response models

use domain::GeoLocation;
use serde::{Deserialize, Serialize};

use crate::error::GeocodingError;

/// A place found by forward geocoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Full human-readable name
    pub display_name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Place {
    /// Position of the place
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude, self.longitude)
    }
}

/// Raw `/search` result; coordinates arrive as strings
#[derive(Debug, Deserialize)]
pub(crate) struct RawSearchResult {
    pub display_name: Option<String>,
    pub lat: String,
    pub lon: String,
}

impl TryFrom<RawSearchResult> for Place {
    type Error = GeocodingError;

    fn try_from(raw: RawSearchResult) -> Result<Self, Self::Error> {
        let latitude = raw
            .lat
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("Invalid latitude: {}", raw.lat)))?;
        let longitude = raw
            .lon
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("Invalid longitude: {}", raw.lon)))?;

        Ok(Self {
            display_name: raw.display_name.unwrap_or_default(),
            latitude,
            longitude,
        })
    }
}

/// Raw `/reverse` response
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawReverseResult {
    #[serde(default)]
    pub address: Option<RawAddress>,
}

/// The address fields a city name can come from
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawAddress {
    pub city: Option<String>,
    pub municipality: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
}

impl RawAddress {
    /// First non-empty of city, municipality, town, village
    pub fn city_name(self) -> Option<String> {
        [self.city, self.municipality, self.town, self.village]
            .into_iter()
            .flatten()
            .find(|name| !name.trim().is_empty())
    }
}
