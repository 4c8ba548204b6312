use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{LatLon, RoutingProfile};
use crate::util::round_ops;

/// identifies a route in the cache by its rounded origin, destination and
/// routing profile, written as `"olat,olon|dlat,dlon|profile"`.
///
/// vehicle type is not part of the key: two vehicle types sharing a profile
/// share one fetched route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    /// decimal digits kept for origin and destination ordinates
    pub const COORDINATE_DIGITS: usize = 5;
    const SEPARATOR: char = '|';

    pub fn new(origin: &LatLon, destination: &LatLon, profile: &RoutingProfile) -> Self {
        let o = origin.rounded(Self::COORDINATE_DIGITS);
        let d = destination.rounded(Self::COORDINATE_DIGITS);
        Self(format!(
            "{},{}{sep}{},{}{sep}{}",
            round_ops::format_coordinate(o.lat),
            round_ops::format_coordinate(o.lon),
            round_ops::format_coordinate(d.lat),
            round_ops::format_coordinate(d.lon),
            profile,
            sep = Self::SEPARATOR
        ))
    }

    /// the routing profile portion of this key, the text after the last separator
    pub fn profile(&self) -> &str {
        match self.0.rsplit_once(Self::SEPARATOR) {
            Some((_, profile)) => profile,
            None => &self.0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CacheKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::CacheKey;
    use crate::model::{LatLon, RoutingProfile};

    #[test]
    fn test_key_format() {
        let key = CacheKey::new(
            &LatLon::new(11.5624871, 104.9160112),
            &LatLon::new(11.55, 104.0),
            &RoutingProfile::new("driving-car"),
        );
        assert_eq!(key.as_str(), "11.56249,104.91601|11.55,104.0|driving-car");
        assert_eq!(key.profile(), "driving-car");
    }

    #[test]
    fn test_key_format_near_zero() {
        let key = CacheKey::new(
            &LatLon::new(0.00001, 104.9),
            &LatLon::new(11.5, -0.00004),
            &RoutingProfile::new("driving-car"),
        );
        assert_eq!(key.as_str(), "1e-05,104.9|11.5,-4e-05|driving-car");
    }

    #[test]
    fn test_key_is_stable_under_sub_precision_noise() {
        let profile = RoutingProfile::new("cycling-regular");
        let a = CacheKey::new(
            &LatLon::new(11.562491, 104.916011),
            &LatLon::new(11.571, 104.92),
            &profile,
        );
        let b = CacheKey::new(
            &LatLon::new(11.5624899, 104.9160114),
            &LatLon::new(11.571, 104.92),
            &profile,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_profile_distinguishes_keys() {
        let o = LatLon::new(11.56, 104.91);
        let d = LatLon::new(11.57, 104.92);
        let car = CacheKey::new(&o, &d, &RoutingProfile::new("driving-car"));
        let bike = CacheKey::new(&o, &d, &RoutingProfile::new("cycling-regular"));
        assert_ne!(car, bike);
    }

    #[test]
    fn test_profile_of_unstructured_key() {
        let key = CacheKey::from(String::from("driving-car"));
        assert_eq!(key.profile(), "driving-car");
    }
}
