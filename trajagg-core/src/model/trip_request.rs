use serde::{Deserialize, Serialize};

use super::{CacheKey, LatLon, RoutingProfile};

/// one origin→destination trip for a single vehicle, paired with the routing
/// profile used to fetch its route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub vehicle_type: String,
    pub origin: LatLon,
    pub destination: LatLon,
    pub profile: RoutingProfile,
}

impl TripRequest {
    pub fn new(
        vehicle_type: &str,
        origin: LatLon,
        destination: LatLon,
        profile: RoutingProfile,
    ) -> Self {
        Self {
            vehicle_type: vehicle_type.to_string(),
            origin,
            destination,
            profile,
        }
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey::new(&self.origin, &self.destination, &self.profile)
    }
}
