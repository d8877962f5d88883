//! The itinerary returned to clients

use serde::Serialize;

use super::{BikeStation, RouteDocument};

/// The three legs of a trip through bike-share stations
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationLegs {
    /// Origin to the pick-up station
    pub origin_to_station: RouteDocument,
    /// Pick-up station to drop-off station, always by bike
    pub station_to_station: RouteDocument,
    /// Drop-off station to destination
    pub station_to_destination: RouteDocument,
}

impl StationLegs {
    /// Legs in travel order
    #[must_use]
    pub fn in_order(&self) -> [&RouteDocument; 3] {
        [
            &self.origin_to_station,
            &self.station_to_station,
            &self.station_to_destination,
        ]
    }
}

/// Either a single direct leg or three station legs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ItineraryPlan {
    /// Origin straight to destination
    Direct(RouteDocument),
    /// Origin, pick-up station, drop-off station, destination
    ViaStations(StationLegs),
}

impl ItineraryPlan {
    /// Legs in travel order
    #[must_use]
    pub fn legs(&self) -> Vec<&RouteDocument> {
        match self {
            Self::Direct(leg) => vec![leg],
            Self::ViaStations(legs) => legs.in_order().to_vec(),
        }
    }
}

/// Composite itinerary
///
/// Both stations are present exactly when the plan goes through stations;
/// the constructors are the only way to build one, so the two can't disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeItinerary {
    use_bike: bool,
    closest_origin_station: Option<BikeStation>,
    closest_destination_station: Option<BikeStation>,
    itinerary: ItineraryPlan,
}

impl CompositeItinerary {
    /// A single-leg itinerary without stations
    #[must_use]
    pub const fn direct(use_bike: bool, leg: RouteDocument) -> Self {
        Self {
            use_bike,
            closest_origin_station: None,
            closest_destination_station: None,
            itinerary: ItineraryPlan::Direct(leg),
        }
    }

    /// A three-leg itinerary through a pick-up and a drop-off station
    #[must_use]
    pub const fn via_stations(
        use_bike: bool,
        origin_station: BikeStation,
        destination_station: BikeStation,
        legs: StationLegs,
    ) -> Self {
        Self {
            use_bike,
            closest_origin_station: Some(origin_station),
            closest_destination_station: Some(destination_station),
            itinerary: ItineraryPlan::ViaStations(legs),
        }
    }

    /// The caller's bike preference
    #[must_use]
    pub const fn use_bike(&self) -> bool {
        self.use_bike
    }

    /// Pick-up station, if the plan uses stations
    #[must_use]
    pub const fn closest_origin_station(&self) -> Option<&BikeStation> {
        self.closest_origin_station.as_ref()
    }

    /// Drop-off station, if the plan uses stations
    #[must_use]
    pub const fn closest_destination_station(&self) -> Option<&BikeStation> {
        self.closest_destination_station.as_ref()
    }

    /// The routing plan
    #[must_use]
    pub const fn itinerary(&self) -> &ItineraryPlan {
        &self.itinerary
    }

    /// Whether this is the single-leg form
    #[must_use]
    pub const fn is_direct(&self) -> bool {
        matches!(self.itinerary, ItineraryPlan::Direct(_))
    }
}
