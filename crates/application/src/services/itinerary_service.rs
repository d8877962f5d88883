//! Itinerary composition
//!
//! Decides between a direct route and a route through two bike-share
//! stations, then assembles the legs into a [`CompositeItinerary`].
//!
//! The composer only talks to ports. Caching happens behind them.

use std::{fmt, sync::Arc};

use domain::{
    BikeStation, CompositeItinerary, DistanceMethod, GeoLocation, RouteDocument, StationLegs,
    TravelMode,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{BikeStationPort, GeocodingPort, RoutingPort},
};

/// Message placed in the `error` field when composition fails
pub const COMPOSITION_FAILED: &str = "An unexpected error occurred while generating the itinerary.";

/// Itinerary composition settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryConfig {
    /// Formula used to rank stations by distance
    #[serde(default)]
    pub distance_method: DistanceMethod,

    /// Fetch the three station legs concurrently
    #[serde(default)]
    pub parallel_legs: bool,
}

impl Default for ItineraryConfig {
    fn default() -> Self {
        Self {
            distance_method: DistanceMethod::Haversine,
            parallel_legs: false,
        }
    }
}

/// Error document returned in place of an itinerary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryFailure {
    /// Fixed, user-facing message
    pub error: String,
    /// Underlying error message
    pub details: String,
}

impl ItineraryFailure {
    fn from_error(err: &ApplicationError) -> Self {
        Self {
            error: COMPOSITION_FAILED.to_string(),
            details: err.to_string(),
        }
    }
}

/// Result of a composition: the itinerary or an error document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ItineraryResponse {
    /// Composition succeeded
    Itinerary(CompositeItinerary),
    /// Composition failed
    Failure(ItineraryFailure),
}

impl ItineraryResponse {
    /// Whether this is the error document
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The itinerary, if composition succeeded
    #[must_use]
    pub const fn itinerary(&self) -> Option<&CompositeItinerary> {
        match self {
            Self::Itinerary(itinerary) => Some(itinerary),
            Self::Failure(_) => None,
        }
    }
}

/// Pick-up station: nearest to `origin` among those with a bike available
///
/// Equidistant candidates resolve to the earliest in `stations`.
pub fn select_origin_station<'a>(
    stations: &'a [BikeStation],
    origin: &GeoLocation,
    method: DistanceMethod,
) -> Option<&'a BikeStation> {
    nearest(
        stations.iter().filter(|s| s.has_available_bike()),
        origin,
        method,
    )
}

/// Drop-off station: nearest to `destination` among those with a free stand
///
/// Equidistant candidates resolve to the earliest in `stations`.
pub fn select_destination_station<'a>(
    stations: &'a [BikeStation],
    destination: &GeoLocation,
    method: DistanceMethod,
) -> Option<&'a BikeStation> {
    nearest(
        stations.iter().filter(|s| s.has_free_stand()),
        destination,
        method,
    )
}

fn nearest<'a>(
    candidates: impl Iterator<Item = &'a BikeStation>,
    target: &GeoLocation,
    method: DistanceMethod,
) -> Option<&'a BikeStation> {
    // min_by keeps the first of equal elements
    candidates
        .map(|station| (station.location().distance_to(target, method), station))
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, station)| station)
}

/// Service composing itineraries from geocoding, station and routing ports
pub struct ItineraryService {
    geocoding: Arc<dyn GeocodingPort>,
    stations: Arc<dyn BikeStationPort>,
    routing: Arc<dyn RoutingPort>,
    config: ItineraryConfig,
}

impl fmt::Debug for ItineraryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItineraryService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ItineraryService {
    /// Create a service with default settings
    pub fn new(
        geocoding: Arc<dyn GeocodingPort>,
        stations: Arc<dyn BikeStationPort>,
        routing: Arc<dyn RoutingPort>,
    ) -> Self {
        Self::with_config(geocoding, stations, routing, ItineraryConfig::default())
    }

    /// Create a service with explicit settings
    pub fn with_config(
        geocoding: Arc<dyn GeocodingPort>,
        stations: Arc<dyn BikeStationPort>,
        routing: Arc<dyn RoutingPort>,
        config: ItineraryConfig,
    ) -> Self {
        Self {
            geocoding,
            stations,
            routing,
            config,
        }
    }

    /// Active settings
    #[must_use]
    pub const fn config(&self) -> &ItineraryConfig {
        &self.config
    }

    /// Compose an itinerary, converting any failure into an error document
    #[instrument(skip(self, origin, destination), fields(origin = %origin, destination = %destination))]
    pub async fn compose_itinerary(
        &self,
        origin: GeoLocation,
        destination: GeoLocation,
        prefer_bike: bool,
    ) -> ItineraryResponse {
        match self.try_compose(&origin, &destination, prefer_bike).await {
            Ok(itinerary) => ItineraryResponse::Itinerary(itinerary),
            Err(e) => {
                warn!(error = %e, "Itinerary composition failed");
                ItineraryResponse::Failure(ItineraryFailure::from_error(&e))
            },
        }
    }

    /// Compose an itinerary, propagating the first failure
    pub async fn try_compose(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
        prefer_bike: bool,
    ) -> Result<CompositeItinerary, ApplicationError> {
        let origin_city = self.geocoding.reverse_geocode(origin).await?;
        let destination_city = self.geocoding.reverse_geocode(destination).await?;
        debug!(%origin_city, %destination_city, "Resolved cities");

        let origin_stations = self.stations_or_empty(&origin_city).await;
        let destination_stations = self.stations_or_empty(&destination_city).await;

        let method = self.config.distance_method;
        let origin_station = select_origin_station(&origin_stations, origin, method);
        let destination_station =
            select_destination_station(&destination_stations, destination, method);

        match (origin_station, destination_station) {
            (Some(pick_up), Some(drop_off)) if prefer_bike => {
                info!(
                    pick_up = %pick_up.name,
                    drop_off = %drop_off.name,
                    "Routing through bike stations"
                );
                let legs = self
                    .station_legs(origin, destination, pick_up, drop_off, prefer_bike)
                    .await?;
                Ok(CompositeItinerary::via_stations(
                    prefer_bike,
                    pick_up.clone(),
                    drop_off.clone(),
                    legs,
                ))
            },
            _ => {
                info!(prefer_bike, "Routing directly");
                let mode = TravelMode::from_bike_flag(prefer_bike);
                let leg = self.routing.compute_route(origin, destination, mode).await?;
                Ok(CompositeItinerary::direct(prefer_bike, leg))
            },
        }
    }

    async fn stations_or_empty(&self, city: &str) -> Vec<BikeStation> {
        match self.stations.list_stations(city).await {
            Ok(stations) => stations,
            Err(e) => {
                warn!(%city, error = %e, "Station lookup failed, continuing without stations");
                Vec::new()
            },
        }
    }

    async fn station_legs(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
        pick_up: &BikeStation,
        drop_off: &BikeStation,
        prefer_bike: bool,
    ) -> Result<StationLegs, ApplicationError> {
        let pick_up_at = pick_up.location();
        let drop_off_at = drop_off.location();
        let walk = TravelMode::from_bike_flag(prefer_bike).opposite();

        let ride = self
            .routing
            .compute_route(&pick_up_at, &drop_off_at, TravelMode::Cycling);
        let approach = self.routing.compute_route(origin, &pick_up_at, walk);
        let finish = self.routing.compute_route(&drop_off_at, destination, walk);

        let (station_to_station, origin_to_station, station_to_destination): (
            RouteDocument,
            RouteDocument,
            RouteDocument,
        ) = if self.config.parallel_legs {
            tokio::try_join!(ride, approach, finish)?
        } else {
            (ride.await?, approach.await?, finish.await?)
        };

        Ok(StationLegs {
            origin_to_station,
            station_to_station,
            station_to_destination,
        })
    }
}
