//! Domain entities

mod bike_station;
mod composite_itinerary;
mod route_document;

pub use bike_station::BikeStation;
pub use composite_itinerary::{CompositeItinerary, ItineraryPlan, StationLegs};
pub use route_document::RouteDocument;
