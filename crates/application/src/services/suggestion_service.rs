//! Place suggestions for the search box

use std::{fmt, sync::Arc};

use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, PlaceSuggestion},
};

/// Default suffix a display name must contain to be suggested
pub const DEFAULT_COUNTRY_SUFFIX: &str = ", France";

/// Forward geocoding restricted to one country
pub struct SuggestionService {
    geocoding: Arc<dyn GeocodingPort>,
    country_suffix: String,
}

impl fmt::Debug for SuggestionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionService")
            .field("country_suffix", &self.country_suffix)
            .finish_non_exhaustive()
    }
}

impl SuggestionService {
    /// Create a service filtering on [`DEFAULT_COUNTRY_SUFFIX`]
    pub fn new(geocoding: Arc<dyn GeocodingPort>) -> Self {
        Self::with_country_suffix(geocoding, DEFAULT_COUNTRY_SUFFIX)
    }

    /// Create a service filtering on a custom suffix; empty disables filtering
    pub fn with_country_suffix(
        geocoding: Arc<dyn GeocodingPort>,
        country_suffix: impl Into<String>,
    ) -> Self {
        Self {
            geocoding,
            country_suffix: country_suffix.into(),
        }
    }

    /// Suggestions for a partial place name
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a blank query, otherwise whatever the geocoder returns.
    #[instrument(skip(self))]
    pub async fn suggest(&self, query: &str) -> Result<Vec<PlaceSuggestion>, ApplicationError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ApplicationError::InvalidInput(
                "query must not be empty".to_string(),
            ));
        }

        let results = self.geocoding.search(query).await?;
        let total = results.len();

        let kept: Vec<_> = results
            .into_iter()
            .filter(|s| self.country_suffix.is_empty() || s.display_name.contains(&self.country_suffix))
            .collect();

        debug!(total, kept = kept.len(), "Filtered suggestions");
        Ok(kept)
    }
}
