//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod bike_station_port;
mod geocoding_port;
mod routing_port;

pub use bike_station_port::BikeStationPort;
#[cfg(test)]
pub use bike_station_port::MockBikeStationPort;
pub use geocoding_port::{GeocodingPort, PlaceSuggestion};
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use routing_port::RoutingPort;
#[cfg(test)]
pub use routing_port::MockRoutingPort;
