#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RouteServiceError {
    #[error("rate limited by routing service (HTTP 429)")]
    RateLimited,
    #[error("routing service error {status}: {message}")]
    HttpStatus { status: u16, message: String },
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unable to read route from response: {0}")]
    InvalidResponse(String),
    #[error("failed building routing service client: {0}")]
    ClientBuildError(String),
}
