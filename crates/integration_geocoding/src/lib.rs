//! Nominatim geocoding integration for Veloroute
//!
//! Forward geocoding (free-text place search) and reverse geocoding
//! (coordinate to city name) via [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org).
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, NominatimConfig, NominatimGeocodingClient};
//!
//! let client = NominatimGeocodingClient::new(&NominatimConfig::default())?;
//! let city = client.reverse_geocode(45.7640, 4.8357).await?;
//! assert_eq!(city, "Lyon");
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, NominatimGeocodingClient};
pub use config::NominatimConfig;
pub use error::GeocodingError;
pub use models::Place;
