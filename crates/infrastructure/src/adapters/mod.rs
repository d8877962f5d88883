//! Infrastructure adapters
//!
//! Adapters connect application ports to the provider clients. The
//! [`ProviderProxy`] decorates them with response caches.

mod bike_station_adapter;
mod geocoding_adapter;
mod provider_proxy;
mod routing_adapter;

pub use bike_station_adapter::BikeStationAdapter;
pub use geocoding_adapter::GeocodingAdapter;
pub use provider_proxy::{ProviderProxy, ProxyCacheStats};
pub use routing_adapter::RoutingAdapter;
