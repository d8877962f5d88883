//! Nominatim client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header; Nominatim rejects anonymous clients
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of search results
    #[serde(default = "default_search_limit")]
    pub search_limit: u8,

    /// Minimum spacing between requests in milliseconds (0 disables)
    #[serde(default = "default_min_request_interval_ms")]
    pub min_request_interval_ms: u64,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("Veloroute/", env!("CARGO_PKG_VERSION")).to_string()
}

const fn default_search_limit() -> u8 {
    5
}

const fn default_min_request_interval_ms() -> u64 {
    1000
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            search_limit: default_search_limit(),
            min_request_interval_ms: default_min_request_interval_ms(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            min_request_interval_ms: 0,
            ..Default::default()
        }
    }

    /// Check the configuration for obvious mistakes
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("geocoding.base_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("geocoding.timeout_secs must be greater than 0".to_string());
        }
        if self.search_limit == 0 {
            return Err("geocoding.search_limit must be greater than 0".to_string());
        }
        Ok(())
    }
}
