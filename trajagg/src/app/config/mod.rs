mod app_config;
mod duration_format;
mod style_config;
mod vehicle_config;

pub(crate) use app_config::validate_grid_size;
pub use app_config::{
    AppConfig, FetchSection, GridSection, OrsSection, SegmentsSection, ENV_PREFIX,
    PLACEHOLDER_API_KEY,
};
pub use style_config::{SegmentStyle, StyleConfig};
pub use vehicle_config::VehicleConfig;
