//! Application state shared across handlers

use std::sync::Arc;

use application::{
    ItineraryConfig, ItineraryService, SuggestionService,
    ports::{BikeStationPort, GeocodingPort, RoutingPort},
};
use infrastructure::{AppConfig, ProviderProxy, ProxyCacheStats};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Itinerary composer
    pub itinerary_service: Arc<ItineraryService>,
    /// Country-filtered place suggestions
    pub suggestion_service: Arc<SuggestionService>,
    /// Geocoding provider for the raw lookup endpoints
    pub geocoding: Arc<dyn GeocodingPort>,
    /// Station provider for the raw station endpoint
    pub stations: Arc<dyn BikeStationPort>,
    /// Caching proxy, when the providers sit behind one
    pub proxy: Option<Arc<ProviderProxy>>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("itinerary_service", &self.itinerary_service)
            .field("suggestion_service", &self.suggestion_service)
            .field("proxy", &self.proxy)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Wire services directly onto the given ports
    pub fn from_ports(
        geocoding: Arc<dyn GeocodingPort>,
        stations: Arc<dyn BikeStationPort>,
        routing: Arc<dyn RoutingPort>,
        itinerary: ItineraryConfig,
        country_suffix: &str,
    ) -> Self {
        let itinerary_service = ItineraryService::with_config(
            Arc::clone(&geocoding),
            Arc::clone(&stations),
            routing,
            itinerary,
        );
        let suggestion_service =
            SuggestionService::with_country_suffix(Arc::clone(&geocoding), country_suffix);

        Self {
            itinerary_service: Arc::new(itinerary_service),
            suggestion_service: Arc::new(suggestion_service),
            geocoding,
            stations,
            proxy: None,
        }
    }

    /// Wire every service through one caching proxy
    pub fn from_proxy(proxy: Arc<ProviderProxy>, config: &AppConfig) -> Self {
        let mut state = Self::from_ports(
            Arc::clone(&proxy) as Arc<dyn GeocodingPort>,
            Arc::clone(&proxy) as Arc<dyn BikeStationPort>,
            Arc::clone(&proxy) as Arc<dyn RoutingPort>,
            config.itinerary,
            &config.geocoding.country_suffix,
        );
        state.proxy = Some(proxy);
        state
    }

    /// Cache counters, when a proxy is in place
    pub fn cache_stats(&self) -> Option<ProxyCacheStats> {
        self.proxy.as_ref().map(|proxy| proxy.cache_stats())
    }
}
