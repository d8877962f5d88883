//! Provider configuration sections.

use application::DEFAULT_COUNTRY_SUFFIX;
use integration_geocoding::NominatimConfig;
use serde::{Deserialize, Serialize};

/// Geocoding section: Nominatim client plus the suggestion filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Nominatim client settings
    #[serde(flatten)]
    pub nominatim: NominatimConfig,

    /// Suffix a place name must contain to be suggested; empty disables the filter
    #[serde(default = "default_country_suffix")]
    pub country_suffix: String,
}

fn default_country_suffix() -> String {
    DEFAULT_COUNTRY_SUFFIX.to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            nominatim: NominatimConfig::default(),
            country_suffix: default_country_suffix(),
        }
    }
}
