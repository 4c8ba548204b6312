use trajagg_core::cache::CacheError;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("invalid fetcher configuration: {0}")]
    ConfigurationError(String),
    #[error("failed to checkpoint route cache: {source}")]
    CheckpointError {
        #[from]
        source: CacheError,
    },
}
