use std::path::{Path, PathBuf};

use trajagg_core::{cache::RouteCache, model::TripRequest};
use trajagg_ors::{
    fetch::{FetchReport, RouteFetcher},
    service::OrsRouteService,
};

use super::{
    build_grid_layers, build_segment_layers,
    config::{validate_grid_size, AppConfig},
    output::{write_grids, write_segments, GRID_FILENAME, SEGMENTS_FILENAME},
    read_trips, AppError,
};

/// fetches the route of every configured trip into the route cache.
///
/// the api key is checked before anything is read, so a missing key fails
/// the run without touching the cache.
///
/// # Returns
///
/// * the trips in file order, paired by position with their fetch outcomes
pub fn run_fetch(config: &AppConfig) -> Result<(Vec<TripRequest>, FetchReport), AppError> {
    let api_key = config.api_key()?;
    let trips = read_trips(&config.trips_file, &config.vehicles)?;
    let mut cache = RouteCache::load(&config.cache_file)?;
    log::info!(
        "{} routes in cache at {}",
        cache.len(),
        config.cache_file.to_string_lossy()
    );

    let service = OrsRouteService::new(&config.ors.base_url, &api_key, config.ors.timeout)?;
    let fetcher = RouteFetcher::new(service, config.fetcher_config())?;
    let report = fetcher.fetch_all(&trips, &mut cache)?;
    Ok((trips, report))
}

/// fetches routes, then writes the per-vehicle segment frequencies with
/// their drawing style to the output directory.
pub fn run_segments(config: &AppConfig) -> Result<(), AppError> {
    let (trips, report) = run_fetch(config)?;
    let layers = build_segment_layers(
        &config.vehicles,
        &trips,
        &report.outcomes,
        config.segments.precision,
    );
    let output_file = output_path(&config.output_directory, SEGMENTS_FILENAME)?;
    write_segments(&output_file, &layers, &config.segments.style)?;
    Ok(())
}

/// bins cached route points into per-vehicle density grids and writes them
/// to the output directory. makes no routing service calls.
///
/// # Arguments
///
/// * `config`    - run configuration
/// * `grid_size` - overrides the configured grid size when set
pub fn run_grid(config: &AppConfig, grid_size: Option<usize>) -> Result<(), AppError> {
    let n = grid_size.unwrap_or(config.grid.size);
    validate_grid_size(n)?;
    log::info!("building {n}x{n} trajectory distribution grid");

    let trips = read_trips(&config.trips_file, &config.vehicles)?;
    let cache = RouteCache::load(&config.cache_file)?;
    log::info!("{} routes in cache", cache.len());

    let layers = build_grid_layers(&config.vehicles, &trips, &cache, n, config.grid.padding);
    let output_file = output_path(&config.output_directory, GRID_FILENAME)?;
    write_grids(&output_file, &layers)?;
    Ok(())
}

fn output_path(directory: &Path, filename: &str) -> Result<PathBuf, AppError> {
    std::fs::create_dir_all(directory).map_err(|source| AppError::OutputDirectoryError {
        filepath: directory.to_string_lossy().to_string(),
        source,
    })?;
    Ok(directory.join(filename))
}
