//! JCDecaux bike-share integration for Veloroute
//!
//! Live station availability from the [JCDecaux](https://developer.jcdecaux.com)
//! self-service bicycle API. A contract is the operator's name for a city
//! network (`lyon`, `toulouse`, `nantes`, ...).
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_bikeshare::{BikeShareClient, JcDecauxClient, JcDecauxConfig};
//!
//! let client = JcDecauxClient::new(&JcDecauxConfig::with_api_key("..."))?;
//! let stations = client.list_stations("lyon").await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{BikeShareClient, JcDecauxClient};
pub use config::JcDecauxConfig;
pub use error::BikeShareError;
