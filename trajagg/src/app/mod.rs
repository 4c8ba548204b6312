mod app_error;
pub mod config;
mod grid_layer;
pub mod output;
mod run_ops;
mod segment_layer;
mod trajagg_cli;
mod trip_source;

pub use app_error::AppError;
pub use grid_layer::{build_grid_layers, GridLayer, PointSource, ALL_VEHICLES_LAYER};
pub use run_ops::{run_fetch, run_grid, run_segments};
pub use segment_layer::{build_segment_layers, SegmentLayer};
pub use trajagg_cli::{TrajaggCliArguments, TrajaggOperation};
pub use trip_source::{read_trips, TripRecord};
