//! JCDecaux response models

use domain::BikeStation;
use serde::Deserialize;

/// One station of `/vls/v1/stations`; fields we don't read are ignored
#[derive(Debug, Deserialize)]
pub(crate) struct RawStation {
    pub name: String,
    #[serde(default)]
    pub available_bikes: u32,
    #[serde(default)]
    pub bike_stands: u32,
    pub position: RawPosition,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPosition {
    pub lat: f64,
    pub lng: f64,
}

impl From<RawStation> for BikeStation {
    fn from(raw: RawStation) -> Self {
        Self::new(
            raw.name,
            raw.available_bikes,
            raw.bike_stands,
            raw.position.lat,
            raw.position.lng,
        )
    }
}
