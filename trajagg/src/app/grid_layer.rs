use std::fmt::Display;

use trajagg_core::{
    aggregate::{build_grid, collect_od_points, collect_route_points, FrequencyGrid},
    cache::RouteCache,
    model::{BoundingBox, TripRequest},
};

use super::config::VehicleConfig;

/// name of the layer combining the points of every vehicle
pub const ALL_VEHICLES_LAYER: &str = "all";

/// where the points of a grid layer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointSource {
    /// every point of the cached routes of the vehicle's profile
    RouteCache,
    /// trip origins and destinations, used when no route is cached
    OriginDestination,
    /// union of the points of all vehicle layers
    Combined,
}

impl Display for PointSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointSource::RouteCache => write!(f, "route cache"),
            PointSource::OriginDestination => write!(f, "O/D points (no cache)"),
            PointSource::Combined => write!(f, "all vehicles"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GridLayer {
    pub name: String,
    pub source: PointSource,
    pub points: usize,
    pub grid: FrequencyGrid,
}

/// bins trajectory points into one n×n grid per vehicle, in vehicle order,
/// followed by the [`ALL_VEHICLES_LAYER`] grid.
///
/// every layer shares one extent: the bounding box of all trip origins and
/// destinations, grown by `padding` on each side. a vehicle's points are
/// those of the cached routes of its profile, or its trips' origins and
/// destinations when none are cached. vehicles sharing a profile therefore
/// share route points.
///
/// # Arguments
///
/// * `vehicles` - vehicle types, in output order
/// * `trips`    - trips of all vehicles
/// * `cache`    - route cache read for route points
/// * `n`        - rows and columns of every grid
/// * `padding`  - fraction of each axis range added on both sides of the box
pub fn build_grid_layers(
    vehicles: &[VehicleConfig],
    trips: &[TripRequest],
    cache: &RouteCache,
    n: usize,
    padding: f64,
) -> Vec<GridLayer> {
    let bbox = match BoundingBox::from_points(collect_od_points(trips).iter()) {
        Some(bbox) => bbox.padded(padding),
        None => {
            log::warn!("no trip coordinates to span the grid, all grids will be empty");
            BoundingBox::new(0.0, 0.0, 0.0, 0.0)
        }
    };
    log::info!("bounding box: {bbox}");

    let mut layers = Vec::with_capacity(vehicles.len() + 1);
    let mut all_points = vec![];
    for vehicle in vehicles {
        let mut points = collect_route_points(cache, std::slice::from_ref(&vehicle.profile));
        let mut source = PointSource::RouteCache;
        if points.is_empty() {
            points = collect_od_points(trips.iter().filter(|t| t.vehicle_type == vehicle.name));
            source = PointSource::OriginDestination;
        }
        log::info!("{:<10}: {:>6} points  ({source})", vehicle.name, points.len());

        let grid = build_grid(points.iter(), &bbox, n);
        layers.push(GridLayer {
            name: vehicle.name.clone(),
            source,
            points: points.len(),
            grid,
        });
        all_points.extend(points);
    }

    log::info!("total points (all vehicles): {}", all_points.len());
    layers.push(GridLayer {
        name: String::from(ALL_VEHICLES_LAYER),
        source: PointSource::Combined,
        points: all_points.len(),
        grid: build_grid(all_points.iter(), &bbox, n),
    });
    layers
}
