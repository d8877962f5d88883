//! Veloroute HTTP presentation layer
//!
//! Exposes itinerary composition, instruction extraction and the raw
//! provider lookups over HTTP.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::{cors_layer, create_router};
pub use state::AppState;
