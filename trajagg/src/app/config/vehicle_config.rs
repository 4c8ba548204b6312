use serde::{Deserialize, Serialize};
use trajagg_core::model::RoutingProfile;

/// a vehicle type found in the trips file and the routing profile its
/// routes are fetched with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleConfig {
    pub name: String,
    pub profile: RoutingProfile,
}

impl VehicleConfig {
    pub fn new(name: &str, profile: &str) -> Self {
        Self {
            name: name.to_string(),
            profile: RoutingProfile::new(profile),
        }
    }
}
