//! Bike station adapter - Implements BikeStationPort using integration_bikeshare

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::BikeStationPort;
use async_trait::async_trait;
use domain::BikeStation;
use integration_bikeshare::{BikeShareClient, BikeShareError, JcDecauxClient, JcDecauxConfig};
use tracing::instrument;

/// Adapter for JCDecaux station data
pub struct BikeStationAdapter {
    client: Arc<dyn BikeShareClient>,
}

impl std::fmt::Debug for BikeStationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BikeStationAdapter")
            .field("client", &"BikeShareClient")
            .finish()
    }
}

impl BikeStationAdapter {
    /// Wrap an existing client
    pub fn new(client: Arc<dyn BikeShareClient>) -> Self {
        Self { client }
    }

    /// Build a JCDecaux client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &JcDecauxConfig) -> Result<Self, ApplicationError> {
        let client = JcDecauxClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Map integration bike-share error to application error
    fn map_error(err: BikeShareError) -> ApplicationError {
        match err {
            BikeShareError::ParseError(_) => {
                ApplicationError::MalformedUpstreamResponse(err.to_string())
            },
            BikeShareError::Unauthorized => ApplicationError::Configuration(err.to_string()),
            BikeShareError::ConnectionFailed(_)
            | BikeShareError::RequestFailed(_)
            | BikeShareError::Timeout { .. } => {
                ApplicationError::UpstreamUnavailable(err.to_string())
            },
        }
    }
}

#[async_trait]
impl BikeStationPort for BikeStationAdapter {
    #[instrument(skip(self))]
    async fn list_stations(&self, city: &str) -> Result<Vec<BikeStation>, ApplicationError> {
        self.client
            .list_stations(city)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::eq;

    use super::*;

    mock! {
        Client {}

        #[async_trait]
        impl BikeShareClient for Client {
            async fn list_stations(&self, contract: &str) -> Result<Vec<BikeStation>, BikeShareError>;
        }
    }

    #[test]
    fn from_config_creates_adapter() {
        assert!(BikeStationAdapter::from_config(&JcDecauxConfig::for_testing()).is_ok());
    }

    #[test]
    fn map_error_taxonomy() {
        assert!(matches!(
            BikeStationAdapter::map_error(BikeShareError::Timeout { timeout_secs: 1 }),
            ApplicationError::UpstreamUnavailable(_)
        ));
        assert!(matches!(
            BikeStationAdapter::map_error(BikeShareError::ParseError("x".into())),
            ApplicationError::MalformedUpstreamResponse(_)
        ));
        assert!(matches!(
            BikeStationAdapter::map_error(BikeShareError::Unauthorized),
            ApplicationError::Configuration(_)
        ));
    }

    #[tokio::test]
    async fn forwards_city() {
        let mut client = MockClient::new();
        client
            .expect_list_stations()
            .with(eq("Lyon"))
            .times(1)
            .returning(|_| Ok(vec![BikeStation::new("A", 1, 2, 45.0, 4.0)]));

        let adapter = BikeStationAdapter::new(Arc::new(client));
        let stations = adapter.list_stations("Lyon").await.unwrap();
        assert_eq!(stations.len(), 1);
    }

    #[tokio::test]
    async fn failure_is_mapped() {
        let mut client = MockClient::new();
        client
            .expect_list_stations()
            .returning(|_| Err(BikeShareError::RequestFailed("HTTP 500".into())));

        let adapter = BikeStationAdapter::new(Arc::new(client));
        let err = adapter.list_stations("Lyon").await.unwrap_err();
        assert!(matches!(err, ApplicationError::UpstreamUnavailable(_)));
    }
}
