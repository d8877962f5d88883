//! Bike-share station port

use async_trait::async_trait;
use domain::BikeStation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for live bike-share station data
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BikeStationPort: Send + Sync {
    /// All stations of the contract serving `city`
    ///
    /// A city without a bike-share contract yields an empty list, not an error.
    async fn list_stations(&self, city: &str) -> Result<Vec<BikeStation>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn BikeStationPort>();
    }

    #[tokio::test]
    async fn mock_unknown_city_is_empty() {
        let mut mock = MockBikeStationPort::new();
        mock.expect_list_stations().returning(|_| Ok(Vec::new()));

        assert!(mock.list_stations("Nowhere").await.unwrap().is_empty());
    }
}
