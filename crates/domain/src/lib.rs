//! Domain layer for Veloroute
//!
//! Contains the itinerary vocabulary: coordinates, travel modes, bike stations,
//! routing legs and the composite itinerary returned to clients, plus the
//! distance estimator used to rank stations. This layer performs no I/O.

pub mod distance;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use distance::{DistanceMethod, EARTH_RADIUS_M, estimate_distance, haversine_distance};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
