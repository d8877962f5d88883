//! OpenRouteService integration for Veloroute
//!
//! Point-to-point directions from [OpenRouteService](https://openrouteservice.org)
//! for the cycling and walking profiles. Responses are returned as
//! [`domain::RouteDocument`] without reshaping.

mod client;
mod config;
mod error;
mod models;

pub use client::{OpenRouteServiceClient, RoutingClient};
pub use config::OrsConfig;
pub use error::RoutingError;
pub use models::{DirectionsRequest, Profile};
