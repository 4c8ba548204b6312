use geo::{BoundingRect, Coord, MultiPoint, Rect};
use serde::{Deserialize, Serialize};

use super::LatLon;

/// rectangular lat/lon extent of a data set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// padding fraction applied to each axis range before binning, so that
    /// boundary points don't clip asymmetrically into the edge cells.
    pub const DEFAULT_PADDING: f64 = 0.02;

    pub fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    /// the tightest box enclosing all finite points, or None if there are none.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a LatLon>,
    {
        let multipoint: MultiPoint<f64> = points
            .into_iter()
            .filter(|p| p.is_finite())
            .map(|p| Coord::from(*p))
            .collect();
        multipoint.bounding_rect().map(Self::from)
    }

    /// grows the box on every side by `fraction` of the matching axis range.
    /// a degenerate axis stays degenerate.
    pub fn padded(&self, fraction: f64) -> Self {
        let pad_lat = self.lat_range() * fraction;
        let pad_lon = self.lon_range() * fraction;
        Self {
            lat_min: self.lat_min - pad_lat,
            lat_max: self.lat_max + pad_lat,
            lon_min: self.lon_min - pad_lon,
            lon_max: self.lon_max + pad_lon,
        }
    }

    pub fn lat_range(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    pub fn lon_range(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    /// true when either axis has zero extent
    pub fn is_degenerate(&self) -> bool {
        self.lat_range() == 0.0 || self.lon_range() == 0.0
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(value: Rect<f64>) -> Self {
        Self {
            lat_min: value.min().y,
            lat_max: value.max().y,
            lon_min: value.min().x,
            lon_max: value.max().x,
        }
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lat [{:.4}, {:.4}]  lon [{:.4}, {:.4}]",
            self.lat_min, self.lat_max, self.lon_min, self.lon_max
        )
    }
}
