use geo::Coord;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::util::round_ops;

/// a WGS84 point in (latitude, longitude) order. this is the internal point
/// order for all routes; it is serialized as a two-element `[lat, lon]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// builds a point from a coordinate given in (longitude, latitude) order,
    /// which is the convention of GeoJSON and of the routing service.
    pub fn from_lon_lat(lon: f64, lat: f64) -> Self {
        Self { lat, lon }
    }

    /// rounds both ordinates to `digits` decimal places
    pub fn rounded(&self, digits: usize) -> Self {
        Self {
            lat: round_ops::round_to(self.lat, digits),
            lon: round_ops::round_to(self.lon, digits),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<[f64; 2]> for LatLon {
    fn from(value: [f64; 2]) -> Self {
        let [lat, lon] = value;
        Self { lat, lon }
    }
}

impl From<LatLon> for [f64; 2] {
    fn from(value: LatLon) -> Self {
        [value.lat, value.lon]
    }
}

impl From<LatLon> for Coord<f64> {
    fn from(value: LatLon) -> Self {
        Coord {
            x: value.lon,
            y: value.lat,
        }
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.lat, self.lon)
    }
}
