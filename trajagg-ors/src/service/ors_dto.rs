use std::str::FromStr;

use geojson::GeoJson;
use serde::Serialize;
use trajagg_core::model::{LatLon, RoutePolyline};

use super::RouteServiceError;

/// body of an OpenRouteService directions request. coordinates are in
/// (longitude, latitude) order.
#[derive(Debug, Clone, Serialize)]
pub struct DirectionsRequest {
    coordinates: [[f64; 2]; 2],
}

impl DirectionsRequest {
    pub fn new(origin: &LatLon, destination: &LatLon) -> Self {
        Self {
            coordinates: [
                [origin.lon, origin.lat],
                [destination.lon, destination.lat],
            ],
        }
    }
}

/// reads the route from a directions response. the response is a GeoJSON
/// FeatureCollection whose first feature holds the route as a LineString in
/// (longitude, latitude) order; the result is converted to (lat, lon).
pub fn parse_directions_response(body: &str) -> Result<RoutePolyline, RouteServiceError> {
    let dataset = GeoJson::from_str(body).map_err(|e| {
        RouteServiceError::InvalidResponse(format!("response is not GeoJSON: {e}"))
    })?;
    let feature_collection = match dataset {
        GeoJson::FeatureCollection(fc) => Ok(fc),
        GeoJson::Geometry(_) => Err(RouteServiceError::InvalidResponse(String::from(
            "expected a FeatureCollection but found a single 'Geometry'",
        ))),
        GeoJson::Feature(_) => Err(RouteServiceError::InvalidResponse(String::from(
            "expected a FeatureCollection but found a single 'Feature'",
        ))),
    }?;
    let feature = feature_collection.features.into_iter().next().ok_or_else(|| {
        RouteServiceError::InvalidResponse(String::from("response contains no route features"))
    })?;
    let geom = feature.geometry.ok_or_else(|| {
        RouteServiceError::InvalidResponse(String::from("route feature has no geometry"))
    })?;
    let geometry: geo::Geometry<f64> = geom.try_into().map_err(|e| {
        RouteServiceError::InvalidResponse(format!("failed to decode route geometry: {e}"))
    })?;
    match geometry {
        geo::Geometry::LineString(line) => Ok(line
            .coords()
            .map(|c| LatLon::from_lon_lat(c.x, c.y))
            .collect()),
        other => Err(RouteServiceError::InvalidResponse(format!(
            "route geometry must be a LineString, found {other:?}"
        ))),
    }
}
