//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the provider integration
//! crates, caches their responses, and hosts configuration and logging setup.

pub mod adapters;
pub mod cache;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use cache::{CacheStats, ExpiringCache, ExpiringCacheConfig, cache_key};
pub use config::{AppConfig, CacheConfig, GeocodingConfig, LogFormat, ServerConfig};
pub use telemetry::{TelemetryError, init_logging};
