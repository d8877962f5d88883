//! OpenRouteService directions client

use std::time::Duration;

use async_trait::async_trait;
use domain::{GeoLocation, RouteDocument, TravelMode};
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::OrsConfig;
use crate::error::RoutingError;
use crate::models::{DirectionsRequest, ErrorBody, Profile};

/// Trait for routing clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Directions between two points
    async fn directions(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
        mode: TravelMode,
    ) -> Result<RouteDocument, RoutingError>;
}

/// Client for the OpenRouteService `/v2/directions` API
#[derive(Debug)]
pub struct OpenRouteServiceClient {
    client: Client,
    config: OrsConfig,
}

impl OpenRouteServiceClient {
    /// Create a new OpenRouteService client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &OrsConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn directions_url(&self, profile: Profile) -> String {
        format!(
            "{}/v2/directions/{}",
            self.config.base_url.trim_end_matches('/'),
            profile.as_str()
        )
    }

    fn parse_route(body: &str) -> Result<RouteDocument, RoutingError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| RoutingError::ParseError(e.to_string()))?;
        RouteDocument::from_value(value).map_err(|e| RoutingError::ParseError(e.to_string()))
    }

    fn error_message(body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error.into_message())
            .unwrap_or_else(|_| body.chars().take(200).collect())
    }
}

#[async_trait]
impl RoutingClient for OpenRouteServiceClient {
    #[instrument(skip(self, from, to), fields(from = %from, to = %to))]
    async fn directions(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
        mode: TravelMode,
    ) -> Result<RouteDocument, RoutingError> {
        let profile = Profile::from(mode);
        let url = self.directions_url(profile);
        let body = DirectionsRequest::between(from, to);

        debug!(%url, ?profile, "Requesting directions");

        let response = self
            .client
            .post(&url)
            .query(&[("language", self.config.language.as_str())])
            .header("Authorization", self.config.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoutingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    RoutingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(RoutingError::RateLimitExceeded);
        }

        let text = response
            .text()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        if !status.is_success() {
            let message = Self::error_message(&text);
            warn!(%status, %message, "Directions request failed");
            return Err(RoutingError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        Self::parse_route(&text)
    }
}
