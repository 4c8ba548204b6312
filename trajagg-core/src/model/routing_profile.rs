use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// name of a travel mode of the external routing service, such as
/// `driving-car` or `cycling-regular`. several vehicle types may share one
/// profile, in which case they share cached routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutingProfile(String);

impl RoutingProfile {
    pub fn new(profile: &str) -> Self {
        Self(profile.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RoutingProfile {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for RoutingProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
