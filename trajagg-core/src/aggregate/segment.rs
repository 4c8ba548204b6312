use ordered_float::OrderedFloat;
use std::fmt::Display;

use crate::model::LatLon;

type SegmentPoint = (OrderedFloat<f64>, OrderedFloat<f64>);

/// an undirected stretch of road between two rounded points.
///
/// the endpoints are stored sorted by (lat, lon), so the segment from A to B
/// and the segment from B to A are the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment {
    a: SegmentPoint,
    b: SegmentPoint,
}

impl Segment {
    /// builds the segment between two points after rounding both to
    /// `precision` decimal places.
    pub fn new(p: &LatLon, q: &LatLon, precision: usize) -> Self {
        let p = as_segment_point(&p.rounded(precision));
        let q = as_segment_point(&q.rounded(precision));
        if p <= q {
            Self { a: p, b: q }
        } else {
            Self { a: q, b: p }
        }
    }

    /// the lesser endpoint
    pub fn start(&self) -> LatLon {
        LatLon::new(self.a.0.into_inner(), self.a.1.into_inner())
    }

    /// the greater endpoint
    pub fn end(&self) -> LatLon {
        LatLon::new(self.b.0.into_inner(), self.b.1.into_inner())
    }
}

fn as_segment_point(p: &LatLon) -> SegmentPoint {
    (OrderedFloat(p.lat), OrderedFloat(p.lon))
}

impl Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start(), self.end())
    }
}
