use std::collections::HashSet;

use super::{Segment, SegmentCounts};
use crate::model::LatLon;

/// decimal places used to match route points onto shared road segments.
/// 4 decimal places is roughly 11 meters, which is road-level matching.
pub const DEFAULT_SEGMENT_PRECISION: usize = 4;

/// counts how many routes pass through each road segment.
///
/// a segment is a pair of consecutive route points rounded to `precision`
/// decimal places with its direction normalized, so A→B and B→A are the same
/// segment. each route adds at most 1 to any segment, even when it revisits
/// that segment (out-and-back paths, loops), which keeps a single long route
/// from inflating a segment's count.
///
/// # Arguments
///
/// * `routes`    - route polylines; `None` (no route) and empty routes add nothing
/// * `precision` - decimal places used to round route points
///
/// # Returns
///
/// * counts by segment, in the order segments were first walked
pub fn count_segments<I, R>(routes: I, precision: usize) -> SegmentCounts
where
    I: IntoIterator<Item = Option<R>>,
    R: AsRef<[LatLon]>,
{
    let mut counts = SegmentCounts::default();
    for route in routes.into_iter().flatten() {
        let mut seen_in_route: HashSet<Segment> = HashSet::new();
        for pair in route.as_ref().windows(2) {
            let segment = Segment::new(&pair[0], &pair[1], precision);
            if seen_in_route.insert(segment) {
                counts.increment(segment);
            }
        }
    }
    counts
}
