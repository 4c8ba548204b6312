use itertools::Itertools;

use crate::{
    cache::RouteCache,
    model::{LatLon, RoutingProfile, TripRequest},
};

/// collects every point of the cached routes built with one of `profiles`.
///
/// this reads the whole cache rather than the routes of a single run, so it
/// also picks up routes fetched by earlier runs. profiles are visited in the
/// order given (repeats ignored), routes in cache key order.
pub fn collect_route_points(cache: &RouteCache, profiles: &[RoutingProfile]) -> Vec<LatLon> {
    profiles
        .iter()
        .unique()
        .flat_map(|profile| cache.routes_for_profile(profile.as_str()))
        .flat_map(|route| route.iter().copied())
        .collect()
}

/// collects the origin and destination points of each trip. used in place of
/// route points when no route is cached for a vehicle.
pub fn collect_od_points<'a, I>(trips: I) -> Vec<LatLon>
where
    I: IntoIterator<Item = &'a TripRequest>,
{
    trips
        .into_iter()
        .flat_map(|trip| [trip.origin, trip.destination])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{collect_od_points, collect_route_points};
    use crate::{
        cache::RouteCache,
        model::{LatLon, RoutingProfile, TripRequest},
    };

    #[test]
    fn test_collect_route_points_by_profile() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut cache = RouteCache::new(&dir.path().join("c.json"));
        let car = RoutingProfile::new("driving-car");
        let bike = RoutingProfile::new("cycling-regular");
        let o = LatLon::new(1.0, 1.0);
        let d = LatLon::new(2.0, 2.0);
        let car_trip = TripRequest::new("EV Car", o, d, car.clone());
        let bike_trip = TripRequest::new("Rickshaw", o, d, bike.clone());
        cache.put(car_trip.cache_key(), vec![o, LatLon::new(1.5, 1.5), d]);
        cache.put(bike_trip.cache_key(), vec![o, d]);

        assert_eq!(collect_route_points(&cache, &[car.clone()]).len(), 3);
        assert_eq!(collect_route_points(&cache, &[car.clone(), car.clone()]).len(), 3);
        assert_eq!(collect_route_points(&cache, &[bike.clone()]).len(), 2);
        assert_eq!(collect_route_points(&cache, &[car, bike]).len(), 5);
        let electric = RoutingProfile::new("cycling-electric");
        assert!(collect_route_points(&cache, &[electric]).is_empty());
    }

    #[test]
    fn test_collect_od_points() {
        let profile = RoutingProfile::new("driving-car");
        let trips = vec![
            TripRequest::new(
                "EV Car",
                LatLon::new(1.0, 2.0),
                LatLon::new(3.0, 4.0),
                profile.clone(),
            ),
            TripRequest::new(
                "EV Car",
                LatLon::new(5.0, 6.0),
                LatLon::new(7.0, 8.0),
                profile,
            ),
        ];
        let points = collect_od_points(&trips);
        assert_eq!(
            points,
            vec![
                LatLon::new(1.0, 2.0),
                LatLon::new(3.0, 4.0),
                LatLon::new(5.0, 6.0),
                LatLon::new(7.0, 8.0)
            ]
        );
    }
}
