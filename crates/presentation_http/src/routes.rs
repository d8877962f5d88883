//! Route definitions

use axum::{Router, http::HeaderValue, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        // Itineraries
        .route("/itinerary", get(handlers::itinerary::get_itinerary))
        .route(
            "/itinerary/instructions",
            get(handlers::itinerary::get_instructions),
        )
        // Raw provider lookups
        .route("/jcdecaux/stations", get(handlers::stations::list_stations))
        .route("/openstreetmap/geocode", get(handlers::places::geocode))
        .route(
            "/openstreetmap/reverse",
            get(handlers::places::reverse_geocode),
        )
        .route("/suggestions", get(handlers::places::suggestions))
        .fallback(handlers::fallback)
        .with_state(state)
}

/// CORS layer: any origin when `allowed_origins` is empty
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
