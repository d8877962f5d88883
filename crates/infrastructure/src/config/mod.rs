//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `cache`: provider cache TTL and size
//! - `providers`: geocoding section (Nominatim plus suggestion filter)
//!
//! The bike-share and routing sections reuse the integration crates' own
//! config types; the itinerary section reuses `application::ItineraryConfig`.

mod cache;
mod providers;
mod server;

use application::ItineraryConfig;
use integration_bikeshare::JcDecauxConfig;
use integration_routing::OrsConfig;
use serde::{Deserialize, Serialize};

pub use cache::CacheConfig;
pub use providers::GeocodingConfig;
pub use server::{LogFormat, ServerConfig};

/// Environment variable prefix (`VELOROUTE_SERVER__PORT=8080`)
pub const ENV_PREFIX: &str = "VELOROUTE";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Provider cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Nominatim geocoding
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// JCDecaux station data
    #[serde(default)]
    pub bikeshare: JcDecauxConfig,

    /// OpenRouteService directions
    #[serde(default)]
    pub routing: OrsConfig,

    /// Itinerary composition
    #[serde(default)]
    pub itinerary: ItineraryConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from TOML text, still applying environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or a value has the wrong type.
    pub fn from_toml(toml: &str) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from_str(toml, config::FileFormat::Toml))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Check every section, collecting all problems
    ///
    /// # Errors
    ///
    /// Returns one message per misconfigured setting.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if self.server.host.trim().is_empty() {
            problems.push("server.host must not be empty".to_string());
        }
        if self.cache.enabled && self.cache.ttl_secs == 0 {
            problems.push("cache.ttl_secs must be greater than 0 when caching is enabled".to_string());
        }
        if self.cache.max_entries == 0 {
            problems.push("cache.max_entries must be greater than 0".to_string());
        }

        let sections = [
            self.geocoding.nominatim.validate(),
            self.bikeshare.validate(),
            self.routing.validate(),
        ];
        problems.extend(sections.into_iter().filter_map(Result::err));

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}
