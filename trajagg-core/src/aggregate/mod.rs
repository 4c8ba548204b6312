mod frequency_grid;
mod grid_ops;
mod normalize_ops;
mod points_ops;
mod segment;
mod segment_counts;
mod segment_ops;

pub use frequency_grid::FrequencyGrid;
pub use grid_ops::build_grid;
pub use normalize_ops::normalize;
pub use points_ops::{collect_od_points, collect_route_points};
pub use segment::Segment;
pub use segment_counts::SegmentCounts;
pub use segment_ops::{count_segments, DEFAULT_SEGMENT_PRECISION};
