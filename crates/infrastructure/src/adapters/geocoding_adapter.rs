//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{GeocodingPort, PlaceSuggestion};
use async_trait::async_trait;
use domain::GeoLocation;
use integration_geocoding::{
    GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient, Place,
};
use tracing::instrument;

/// Adapter for geocoding via Nominatim
pub struct GeocodingAdapter {
    client: Arc<dyn GeocodingClient>,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"GeocodingClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Wrap an existing client
    pub fn new(client: Arc<dyn GeocodingClient>) -> Self {
        Self { client }
    }

    /// Build a Nominatim client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Map integration geocoding error to application error
    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::CityNotFound(_) => ApplicationError::NotFound(err.to_string()),
            GeocodingError::InvalidQuery(msg) => ApplicationError::InvalidInput(msg),
            GeocodingError::ParseError(_) => {
                ApplicationError::MalformedUpstreamResponse(err.to_string())
            },
            GeocodingError::ConnectionFailed(_)
            | GeocodingError::RequestFailed(_)
            | GeocodingError::RateLimitExceeded
            | GeocodingError::Timeout => ApplicationError::UpstreamUnavailable(err.to_string()),
        }
    }

    fn map_place(place: Place) -> PlaceSuggestion {
        PlaceSuggestion::new(place.display_name, place.latitude, place.longitude)
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn reverse_geocode(&self, location: &GeoLocation) -> Result<String, ApplicationError> {
        self.client
            .reverse_geocode(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<PlaceSuggestion>, ApplicationError> {
        let places = self.client.search(query).await.map_err(Self::map_error)?;
        Ok(places.into_iter().map(Self::map_place).collect())
    }
}
