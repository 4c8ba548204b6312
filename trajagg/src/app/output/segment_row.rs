use serde::{Deserialize, Serialize};
use trajagg_core::aggregate::Segment;

use crate::app::config::SegmentStyle;

/// one styled segment of one vehicle layer. the first endpoint is the
/// smaller of the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRow {
    pub vehicle_type: String,
    pub lat_a: f64,
    pub lon_a: f64,
    pub lat_b: f64,
    pub lon_b: f64,
    pub count: usize,
    pub opacity: f64,
    pub width: f64,
}

impl SegmentRow {
    pub fn new(vehicle_type: &str, segment: &Segment, count: usize, style: SegmentStyle) -> Self {
        let a = segment.start();
        let b = segment.end();
        Self {
            vehicle_type: vehicle_type.to_string(),
            lat_a: a.lat,
            lon_a: a.lon,
            lat_b: b.lat,
            lon_b: b.lon,
            count,
            opacity: style.opacity,
            width: style.width,
        }
    }
}
