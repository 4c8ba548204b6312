mod ors_dto;
mod ors_route_service;
mod route_service;
mod route_service_error;

pub use ors_route_service::{OrsRouteService, DEFAULT_ORS_BASE_URL};
pub use route_service::RouteService;
pub use route_service_error::RouteServiceError;
