use itertools::Itertools;
use trajagg_core::{
    aggregate::{count_segments, SegmentCounts},
    model::TripRequest,
};
use trajagg_ors::fetch::FetchOutcome;

use super::config::VehicleConfig;

/// segment frequencies of the routes of one vehicle type
#[derive(Debug, Clone)]
pub struct SegmentLayer {
    pub vehicle_type: String,
    /// trips of this vehicle with a non-empty route
    pub routes: usize,
    pub counts: SegmentCounts,
}

/// counts segment usage per vehicle type, in vehicle order.
///
/// `outcomes` pairs with `trips` by position. failed fetches and empty
/// routes contribute nothing. vehicles without any valid route produce no
/// layer.
pub fn build_segment_layers(
    vehicles: &[VehicleConfig],
    trips: &[TripRequest],
    outcomes: &[FetchOutcome],
    precision: usize,
) -> Vec<SegmentLayer> {
    vehicles
        .iter()
        .filter_map(|vehicle| {
            let routes = trips
                .iter()
                .zip(outcomes)
                .filter(|(trip, _)| trip.vehicle_type == vehicle.name)
                .filter_map(|(_, outcome)| outcome.route())
                .filter(|route| !route.is_empty())
                .collect_vec();
            if routes.is_empty() {
                log::warn!("{}: no valid routes, skipping layer", vehicle.name);
                return None;
            }
            let counts = count_segments(routes.iter().map(Some), precision);
            let (lo, hi) = counts.range().unwrap_or_default();
            log::info!(
                "{:<10}  routes: {:>4}  unique segments: {:>5}  freq range: {lo}-{hi}",
                vehicle.name,
                routes.len(),
                counts.len()
            );
            Some(SegmentLayer {
                vehicle_type: vehicle.name.clone(),
                routes: routes.len(),
                counts,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::build_segment_layers;
    use crate::app::config::VehicleConfig;
    use trajagg_core::{
        aggregate::Segment,
        model::{LatLon, RoutingProfile, TripRequest},
    };
    use trajagg_ors::{fetch::FetchOutcome, service::RouteServiceError};

    fn trip(vehicle: &str, profile: &str) -> TripRequest {
        TripRequest::new(
            vehicle,
            LatLon::new(0.0, 0.0),
            LatLon::new(0.0, 2.0),
            RoutingProfile::new(profile),
        )
    }

    #[test]
    fn test_layers_follow_vehicle_order() {
        let vehicles = vec![
            VehicleConfig::new("EV Car", "driving-car"),
            VehicleConfig::new("Motor Dup", "cycling-electric"),
            VehicleConfig::new("Rickshaw", "cycling-regular"),
        ];
        let shared = vec![
            LatLon::new(0.0, 0.0),
            LatLon::new(0.0, 1.0),
            LatLon::new(0.0, 2.0),
        ];
        let trips = vec![
            trip("Rickshaw", "cycling-regular"),
            trip("EV Car", "driving-car"),
            trip("EV Car", "driving-car"),
            trip("Motor Dup", "cycling-electric"),
            trip("Rickshaw", "cycling-regular"),
        ];
        let outcomes = vec![
            FetchOutcome::Fetched(shared.clone()),
            FetchOutcome::Fetched(shared.clone()),
            FetchOutcome::CacheHit(shared.clone()),
            FetchOutcome::Failed(RouteServiceError::RateLimited),
            FetchOutcome::Fetched(vec![]),
        ];

        let layers = build_segment_layers(&vehicles, &trips, &outcomes, 4);
        let names = layers.iter().map(|l| l.vehicle_type.as_str()).collect::<Vec<_>>();
        // Motor Dup has no valid route
        assert_eq!(names, vec!["EV Car", "Rickshaw"]);

        let car = &layers[0];
        assert_eq!(car.routes, 2);
        assert_eq!(car.counts.len(), 2);
        let first = Segment::new(&shared[0], &shared[1], 4);
        assert_eq!(car.counts.get(&first), 2);

        let rickshaw = &layers[1];
        assert_eq!(rickshaw.routes, 1);
        assert_eq!(rickshaw.counts.get(&first), 1);
    }
}
