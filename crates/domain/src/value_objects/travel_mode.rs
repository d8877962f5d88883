//! Travel mode for a single routing leg

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// How a leg is travelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// Riding a bike
    Cycling,
    /// On foot
    Walking,
}

impl TravelMode {
    /// Mode matching a "prefer bike" flag
    #[must_use]
    pub const fn from_bike_flag(use_bike: bool) -> Self {
        if use_bike { Self::Cycling } else { Self::Walking }
    }

    /// The other mode
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Cycling => Self::Walking,
            Self::Walking => Self::Cycling,
        }
    }

    /// Whether this is the bike mode
    #[must_use]
    pub const fn is_cycling(self) -> bool {
        matches!(self, Self::Cycling)
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cycling => "cycling",
            Self::Walking => "walking",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cycling" | "bike" => Ok(Self::Cycling),
            "walking" | "foot" => Ok(Self::Walking),
            other => Err(DomainError::InvalidTravelMode(other.to_string())),
        }
    }
}
