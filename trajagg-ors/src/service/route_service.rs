use trajagg_core::model::{LatLon, RoutePolyline, RoutingProfile};

use super::RouteServiceError;

/// an external routing service, treated as a black box that answers an
/// origin/destination pair with a route polyline.
pub trait RouteService {
    /// requests the route between two points for a routing profile.
    ///
    /// # Arguments
    ///
    /// * `profile`     - travel mode of the service to route with
    /// * `origin`      - trip start
    /// * `destination` - trip end
    ///
    /// # Returns
    ///
    /// * the route in (lat, lon) point order, or the reason the request failed.
    ///   a rate-limit response must be reported as [`RouteServiceError::RateLimited`].
    fn route(
        &self,
        profile: &RoutingProfile,
        origin: &LatLon,
        destination: &LatLon,
    ) -> Result<RoutePolyline, RouteServiceError>;
}
