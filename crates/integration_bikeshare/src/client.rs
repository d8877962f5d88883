//! JCDecaux station client

use std::time::Duration;

use async_trait::async_trait;
use domain::BikeStation;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

use crate::config::JcDecauxConfig;
use crate::error::BikeShareError;
use crate::models::RawStation;

/// Trait for bike-share station clients
#[async_trait]
pub trait BikeShareClient: Send + Sync {
    /// Current state of every station in a contract
    ///
    /// An unknown contract yields an empty list.
    async fn list_stations(&self, contract: &str) -> Result<Vec<BikeStation>, BikeShareError>;
}

/// Client for the JCDecaux `/vls/v1` API
#[derive(Debug)]
pub struct JcDecauxClient {
    client: Client,
    config: JcDecauxConfig,
}

impl JcDecauxClient {
    /// Create a new JCDecaux client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &JcDecauxConfig) -> Result<Self, BikeShareError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BikeShareError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn parse_stations(body: &str) -> Result<Vec<BikeStation>, BikeShareError> {
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<RawStation> =
            serde_json::from_str(body).map_err(|e| BikeShareError::ParseError(e.to_string()))?;
        Ok(raw.into_iter().map(BikeStation::from).collect())
    }
}

#[async_trait]
impl BikeShareClient for JcDecauxClient {
    #[instrument(skip(self))]
    async fn list_stations(&self, contract: &str) -> Result<Vec<BikeStation>, BikeShareError> {
        // Contract names are lowercase ("lyon"); geocoders capitalize them
        let contract = contract.trim().to_lowercase();
        if contract.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/vls/v1/stations",
            self.config.base_url.trim_end_matches('/')
        );
        let params = [
            ("contract", contract.as_str()),
            ("apiKey", self.config.api_key.expose_secret()),
        ];

        debug!(%url, %contract, "Fetching stations");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BikeShareError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    BikeShareError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        match status {
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
                debug!(%contract, %status, "Unknown contract");
                return Ok(Vec::new());
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(BikeShareError::Unauthorized);
            },
            s if !s.is_success() => {
                return Err(BikeShareError::RequestFailed(format!("HTTP {s}")));
            },
            _ => {},
        }

        let body = response
            .text()
            .await
            .map_err(|e| BikeShareError::ParseError(e.to_string()))?;

        let stations = Self::parse_stations(&body)?;
        debug!(count = stations.len(), "Stations fetched");
        Ok(stations)
    }
}
