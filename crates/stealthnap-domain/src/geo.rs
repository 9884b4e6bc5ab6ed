//! Geographic types.

use serde::{Deserialize, Serialize};

/// A WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Both halves of a pair, or nothing. A lone latitude or longitude is
    /// not a position.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

/// Result of resolving a postal code/address to a position.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub coordinates: Coordinates,
    /// Country name reported by the provider, if any.
    pub country: Option<String>,
}
