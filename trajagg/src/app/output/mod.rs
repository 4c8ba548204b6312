mod grid_row;
mod output_ops;
mod segment_row;

pub use grid_row::GridRow;
pub use output_ops::{write_grids, write_segments, GRID_FILENAME, SEGMENTS_FILENAME};
pub use segment_row::SegmentRow;
