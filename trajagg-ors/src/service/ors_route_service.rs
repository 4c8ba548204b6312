use std::time::Duration;

use reqwest::{blocking::Client, header, StatusCode};
use trajagg_core::model::{LatLon, RoutePolyline, RoutingProfile};

use super::{
    ors_dto::{parse_directions_response, DirectionsRequest},
    RouteService, RouteServiceError,
};

pub const DEFAULT_ORS_BASE_URL: &str = "https://api.openrouteservice.org";

/// characters of an error response body kept in error messages
const ERROR_BODY_CHARS: usize = 120;

/// [`RouteService`] backed by the OpenRouteService directions API.
///
/// requests are blocking and carry a fixed timeout; a timed out request is a
/// failure like any other non-rate-limit error.
pub struct OrsRouteService {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OrsRouteService {
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, RouteServiceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RouteServiceError::ClientBuildError(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn directions_url(&self, profile: &RoutingProfile) -> String {
        format!("{}/v2/directions/{}/geojson", self.base_url, profile)
    }
}

impl RouteService for OrsRouteService {
    fn route(
        &self,
        profile: &RoutingProfile,
        origin: &LatLon,
        destination: &LatLon,
    ) -> Result<RoutePolyline, RouteServiceError> {
        let url = self.directions_url(profile);
        log::debug!("POST {url} {origin} -> {destination}");
        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, self.api_key.as_str())
            .header(header::ACCEPT, "application/json, application/geo+json")
            .json(&DirectionsRequest::new(origin, destination))
            .send()
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.text().map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        parse_directions_response(&body)
    }
}

fn map_status_error(status: StatusCode, body: &str) -> RouteServiceError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        RouteServiceError::RateLimited
    } else {
        RouteServiceError::HttpStatus {
            status: status.as_u16(),
            message: body.chars().take(ERROR_BODY_CHARS).collect(),
        }
    }
}

fn map_transport_error(error: reqwest::Error) -> RouteServiceError {
    if error.is_timeout() {
        RouteServiceError::Timeout(error.to_string())
    } else {
        RouteServiceError::Transport(error.to_string())
    }
}
