mod bounding_box;
mod cache_key;
mod lat_lon;
mod routing_profile;
mod trip_request;

pub use bounding_box::BoundingBox;
pub use cache_key::CacheKey;
pub use lat_lon::LatLon;
pub use routing_profile::RoutingProfile;
pub use trip_request::TripRequest;

/// an ordered sequence of (lat, lon) points describing one route
pub type RoutePolyline = Vec<LatLon>;
