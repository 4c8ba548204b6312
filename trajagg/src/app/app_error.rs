use trajagg_core::cache::CacheError;
use trajagg_ors::{fetch::FetchError, service::RouteServiceError};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("invalid configuration: {0}")]
    ConfigurationError(String),
    #[error("failed reading trips from '{filepath}': {source}")]
    TripReadError {
        filepath: String,
        source: csv::Error,
    },
    #[error("failed creating output directory '{filepath}': {source}")]
    OutputDirectoryError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failed writing '{filepath}': {source}")]
    OutputWriteError {
        filepath: String,
        source: csv::Error,
    },
    #[error(transparent)]
    RouteServiceError(#[from] RouteServiceError),
    #[error(transparent)]
    FetchError(#[from] FetchError),
    #[error(transparent)]
    CacheError(#[from] CacheError),
}
