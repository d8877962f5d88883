//! Application layer - Use cases and orchestration
//!
//! Contains the itinerary composer, the instruction extractor, the
//! suggestion filter and the port definitions their providers implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
