use std::time::Duration;

use super::FetchError;

/// batching and rate-limit settings of a [`super::RouteFetcher`].
///
/// the defaults keep a run under the OpenRouteService free tier limit of
/// 40 requests per minute: 35 requests per batch with 65 seconds between
/// batches, and a 70 second cooldown after a rate-limit response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetcherConfig {
    /// requests issued between two checkpoints
    pub batch_size: usize,
    /// wait after each batch except the last
    pub batch_delay: Duration,
    /// wait before retrying a rate-limited request
    pub rate_limit_cooldown: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            batch_size: 35,
            batch_delay: Duration::from_secs(65),
            rate_limit_cooldown: Duration::from_secs(70),
        }
    }
}

impl FetcherConfig {
    pub fn validate(&self) -> Result<(), FetchError> {
        if self.batch_size == 0 {
            return Err(FetchError::ConfigurationError(String::from(
                "batch size must be greater than 0",
            )));
        }
        Ok(())
    }

    /// number of batches needed for `n_requests` requests
    pub fn batch_count(&self, n_requests: usize) -> usize {
        n_requests.div_ceil(self.batch_size.max(1))
    }

    /// worst-case wall time of a run over `n_requests` when nothing is
    /// cached, counting one inter-batch delay per batch.
    pub fn estimated_duration(&self, n_requests: usize) -> Duration {
        let batches = u32::try_from(self.batch_count(n_requests)).unwrap_or(u32::MAX);
        self.batch_delay.saturating_mul(batches)
    }
}
