//! Provider proxy - Caching decorator in front of every provider port
//!
//! Each lookup kind gets its own [`ExpiringCache`]: reverse geocoding, place
//! search, station lists and route legs. Only successful responses are
//! stored; failures pass through and the next call retries the provider.

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{BikeStationPort, GeocodingPort, PlaceSuggestion, RoutingPort},
};
use async_trait::async_trait;
use domain::{BikeStation, GeoLocation, RouteDocument, TravelMode};
use serde::Serialize;
use tracing::instrument;

use super::{BikeStationAdapter, GeocodingAdapter, RoutingAdapter};
use crate::cache::{CacheStats, ExpiringCache, ExpiringCacheConfig, cache_key};
use crate::config::AppConfig;

/// Counters of every proxy cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyCacheStats {
    /// Coordinate to city lookups
    pub reverse_geocode: CacheStats,
    /// Free-text place searches
    pub search: CacheStats,
    /// Station lists per city
    pub stations: CacheStats,
    /// Route legs
    pub routes: CacheStats,
}

/// Caching decorator implementing all three provider ports
pub struct ProviderProxy {
    geocoding: Arc<dyn GeocodingPort>,
    stations: Arc<dyn BikeStationPort>,
    routing: Arc<dyn RoutingPort>,
    reverse_cache: ExpiringCache<String>,
    search_cache: ExpiringCache<Vec<PlaceSuggestion>>,
    station_cache: ExpiringCache<Vec<BikeStation>>,
    route_cache: ExpiringCache<RouteDocument>,
    enabled: bool,
}

impl std::fmt::Debug for ProviderProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderProxy")
            .field("enabled", &self.enabled)
            .field("ttl", &self.route_cache.ttl())
            .finish_non_exhaustive()
    }
}

impl ProviderProxy {
    /// Wrap the three provider ports with caches sharing one configuration
    #[must_use]
    pub fn new(
        geocoding: Arc<dyn GeocodingPort>,
        stations: Arc<dyn BikeStationPort>,
        routing: Arc<dyn RoutingPort>,
        cache_config: ExpiringCacheConfig,
    ) -> Self {
        Self {
            geocoding,
            stations,
            routing,
            reverse_cache: ExpiringCache::new("reverse_geocode", cache_config),
            search_cache: ExpiringCache::new("search", cache_config),
            station_cache: ExpiringCache::new("stations", cache_config),
            route_cache: ExpiringCache::new("routes", cache_config),
            enabled: true,
        }
    }

    /// Build the provider clients and their caches from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a provider HTTP client fails to initialize.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        let proxy = Self::new(
            Arc::new(GeocodingAdapter::from_config(&config.geocoding.nominatim)?),
            Arc::new(BikeStationAdapter::from_config(&config.bikeshare)?),
            Arc::new(RoutingAdapter::from_config(&config.routing)?),
            config.cache.expiring_cache_config(),
        );

        Ok(if config.cache.enabled {
            proxy
        } else {
            proxy.with_caching_disabled()
        })
    }

    /// Send every call straight to the providers
    #[must_use]
    pub const fn with_caching_disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Whether responses are cached
    #[must_use]
    pub const fn is_caching_enabled(&self) -> bool {
        self.enabled
    }

    /// Counters of every cache
    #[must_use]
    pub fn cache_stats(&self) -> ProxyCacheStats {
        ProxyCacheStats {
            reverse_geocode: self.reverse_cache.stats(),
            search: self.search_cache.stats(),
            stations: self.station_cache.stats(),
            routes: self.route_cache.stats(),
        }
    }

    fn route_key(from: &GeoLocation, to: &GeoLocation, mode: TravelMode) -> String {
        cache_key(
            "route",
            &[
                from.key_fragment().as_str(),
                to.key_fragment().as_str(),
                mode.as_str(),
            ],
        )
    }
}

#[async_trait]
impl GeocodingPort for ProviderProxy {
    #[instrument(skip(self))]
    async fn reverse_geocode(&self, location: &GeoLocation) -> Result<String, ApplicationError> {
        if !self.enabled {
            return self.geocoding.reverse_geocode(location).await;
        }
        let key = cache_key("reverse", &[location.key_fragment().as_str()]);
        self.reverse_cache
            .get_or_fetch(&key, || self.geocoding.reverse_geocode(location))
            .await
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<PlaceSuggestion>, ApplicationError> {
        if !self.enabled {
            return self.geocoding.search(query).await;
        }
        let key = cache_key("search", &[query]);
        self.search_cache
            .get_or_fetch(&key, || self.geocoding.search(query))
            .await
    }
}

#[async_trait]
impl BikeStationPort for ProviderProxy {
    #[instrument(skip(self))]
    async fn list_stations(&self, city: &str) -> Result<Vec<BikeStation>, ApplicationError> {
        if !self.enabled {
            return self.stations.list_stations(city).await;
        }
        let key = cache_key("stations", &[city]);
        self.station_cache
            .get_or_fetch(&key, || self.stations.list_stations(city))
            .await
    }
}

#[async_trait]
impl RoutingPort for ProviderProxy {
    #[instrument(skip(self, from, to), fields(from = %from, to = %to))]
    async fn compute_route(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
        mode: TravelMode,
    ) -> Result<RouteDocument, ApplicationError> {
        if !self.enabled {
            return self.routing.compute_route(from, to, mode).await;
        }
        let key = Self::route_key(from, to, mode);
        self.route_cache
            .get_or_fetch(&key, || self.routing.compute_route(from, to, mode))
            .await
    }
}
