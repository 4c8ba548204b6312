mod fetch_error;
mod fetch_outcome;
mod fetcher_config;
mod pause;
mod route_fetcher;

pub use fetch_error::FetchError;
pub use fetch_outcome::{FetchOutcome, FetchReport, FetchSummary};
pub use fetcher_config::FetcherConfig;
pub use pause::{Pause, ThreadPause};
pub use route_fetcher::{RouteFetcher, RATE_LIMIT_RETRIES};
