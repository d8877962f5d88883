//! Routing adapter - Implements RoutingPort using integration_routing

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::RoutingPort;
use async_trait::async_trait;
use domain::{GeoLocation, RouteDocument, TravelMode};
use integration_routing::{OpenRouteServiceClient, OrsConfig, RoutingClient, RoutingError};
use tracing::instrument;

/// Adapter for OpenRouteService directions
pub struct RoutingAdapter {
    client: Arc<dyn RoutingClient>,
}

impl std::fmt::Debug for RoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingAdapter")
            .field("client", &"RoutingClient")
            .finish()
    }
}

impl RoutingAdapter {
    /// Wrap an existing client
    pub fn new(client: Arc<dyn RoutingClient>) -> Self {
        Self { client }
    }

    /// Build an OpenRouteService client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &OrsConfig) -> Result<Self, ApplicationError> {
        let client = OpenRouteServiceClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Map integration routing error to application error
    fn map_error(err: RoutingError) -> ApplicationError {
        match err {
            RoutingError::ParseError(_) => {
                ApplicationError::MalformedUpstreamResponse(err.to_string())
            },
            RoutingError::ConnectionFailed(_)
            | RoutingError::RequestFailed { .. }
            | RoutingError::RateLimitExceeded
            | RoutingError::Timeout { .. } => ApplicationError::UpstreamUnavailable(err.to_string()),
        }
    }
}

#[async_trait]
impl RoutingPort for RoutingAdapter {
    #[instrument(skip(self, from, to), fields(from = %from, to = %to))]
    async fn compute_route(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
        mode: TravelMode,
    ) -> Result<RouteDocument, ApplicationError> {
        self.client
            .directions(from, to, mode)
            .await
            .map_err(Self::map_error)
    }
}
