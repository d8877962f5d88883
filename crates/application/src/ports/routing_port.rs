//! Routing service port

use async_trait::async_trait;
use domain::{GeoLocation, RouteDocument, TravelMode};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for point-to-point route computation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Compute one leg from `from` to `to`
    ///
    /// Provider failures surface as `UpstreamUnavailable`; a body without
    /// `routes[0]` as `MalformedUpstreamResponse`.
    async fn compute_route(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
        mode: TravelMode,
    ) -> Result<RouteDocument, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn RoutingPort>();
    }
}
