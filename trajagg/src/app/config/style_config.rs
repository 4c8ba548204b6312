use serde::{Deserialize, Serialize};
use trajagg_core::aggregate::normalize;

/// output ranges that segment frequencies are mapped onto when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    pub min_opacity: f64,
    pub max_opacity: f64,
    pub min_width: f64,
    pub max_width: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            min_opacity: 0.12,
            max_opacity: 1.0,
            min_width: 2.0,
            max_width: 9.0,
        }
    }
}

/// drawing style of a single segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentStyle {
    pub opacity: f64,
    pub width: f64,
}

impl StyleConfig {
    /// styles a segment used `count` times in a layer whose counts span
    /// `range` (min, max). when every segment of the layer has the same
    /// count, each gets the middle of both output ranges.
    pub fn style(&self, count: usize, range: (usize, usize)) -> SegmentStyle {
        let (lo, hi) = (range.0 as f64, range.1 as f64);
        let value = count as f64;
        SegmentStyle {
            opacity: normalize(value, lo, hi, self.min_opacity, self.max_opacity),
            width: normalize(value, lo, hi, self.min_width, self.max_width),
        }
    }
}
