//! Nominatim geocoding client
//!
//! Nominatim's usage policy allows about one request per second, so the
//! client spaces requests by `min_request_interval_ms`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::config::NominatimConfig;
use crate::error::GeocodingError;
use crate::models::{Place, RawReverseResult, RawSearchResult};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Free-text place search
    async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodingError>;

    /// City name at a coordinate
    async fn reverse_geocode(&self, latitude: f64, longitude: f64)
    -> Result<String, GeocodingError>;
}

/// Nominatim-based geocoding client
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            last_request: Arc::new(Mutex::new(None)),
        })
    }

    /// Wait until the configured spacing since the previous request has passed
    async fn rate_limit(&self) {
        if self.config.min_request_interval_ms == 0 {
            return;
        }
        let interval = Duration::from_millis(self.config.min_request_interval_ms);

        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < interval {
                let wait = interval.saturating_sub(elapsed);
                debug!(?wait, "Rate limiting geocoding request");
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }

    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Response, GeocodingError> {
        self.rate_limit().await;

        let url = format!("{}/{path}", self.config.base_url.trim_end_matches('/'));
        debug!(%url, "Nominatim request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded);
        }
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(response)
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodingError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodingError::InvalidQuery(
                "Search query must not be empty".to_string(),
            ));
        }

        let params = [
            ("q", query.to_string()),
            ("format", "json".to_string()),
            ("limit", self.config.search_limit.to_string()),
        ];

        let results: Vec<RawSearchResult> = self
            .get("search", &params)
            .await?
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let places = results
            .into_iter()
            .map(Place::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = places.len(), "Places found");
        Ok(places)
    }

    #[instrument(skip(self))]
    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<String, GeocodingError> {
        let params = [
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("format", "json".to_string()),
        ];

        let result: RawReverseResult = self
            .get("reverse", &params)
            .await?
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let city = result
            .address
            .and_then(|address| address.city_name())
            .ok_or_else(|| GeocodingError::CityNotFound(format!("{latitude},{longitude}")))?;

        debug!(%city, "Reverse geocoded");
        Ok(city)
    }
}
