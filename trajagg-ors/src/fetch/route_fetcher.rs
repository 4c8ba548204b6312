use trajagg_core::{
    cache::RouteCache,
    model::{CacheKey, TripRequest},
};

use super::{
    FetchError, FetchOutcome, FetchReport, FetchSummary, FetcherConfig, Pause, ThreadPause,
};
use crate::service::{RouteService, RouteServiceError};

/// retries granted to a request that was answered with a rate-limit response
pub const RATE_LIMIT_RETRIES: usize = 1;

/// fetches trip routes from a [`RouteService`] through a [`RouteCache`],
/// in fixed-size batches with a fixed delay between them.
///
/// requests are issued one at a time in input order. the cache is persisted
/// after every batch, which is the only checkpoint of a run: a run killed
/// between batches resumes by hitting the cache for every route already
/// fetched.
pub struct RouteFetcher<S, P = ThreadPause> {
    service: S,
    config: FetcherConfig,
    pause: P,
}

impl<S: RouteService> RouteFetcher<S, ThreadPause> {
    pub fn new(service: S, config: FetcherConfig) -> Result<Self, FetchError> {
        Self::with_pause(service, config, ThreadPause)
    }
}

impl<S: RouteService, P: Pause> RouteFetcher<S, P> {
    pub fn with_pause(service: S, config: FetcherConfig, pause: P) -> Result<Self, FetchError> {
        config.validate()?;
        Ok(Self {
            service,
            config,
            pause,
        })
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// resolves the route of one trip.
    ///
    /// a cached route is returned without calling the service or waiting.
    /// otherwise the service is called once; a rate-limit response is
    /// retried at most [`RATE_LIMIT_RETRIES`] times after the cooldown, and
    /// any other error is final. a successful route is stored in the cache,
    /// failures are not.
    ///
    /// # Arguments
    ///
    /// * `request` - the trip to route
    /// * `cache`   - cache consulted before and updated after the call
    ///
    /// # Returns
    ///
    /// * how the request terminated
    pub fn fetch(&self, request: &TripRequest, cache: &mut RouteCache) -> FetchOutcome {
        let key = request.cache_key();
        if let Some(route) = cache.get(&key) {
            log::debug!("cache hit for {key}");
            return FetchOutcome::CacheHit(route.clone());
        }

        for attempt in 0..=RATE_LIMIT_RETRIES {
            if attempt > 0 {
                log::warn!(
                    "rate limited (429), waiting {:?} before retrying {key}",
                    self.config.rate_limit_cooldown
                );
                self.pause.pause(self.config.rate_limit_cooldown);
                if let Some(route) = cache.get(&key) {
                    log::debug!("cache hit for {key} after cooldown");
                    return FetchOutcome::CacheHit(route.clone());
                }
            }
            match self
                .service
                .route(&request.profile, &request.origin, &request.destination)
            {
                Ok(route) => {
                    log::debug!("fetched {} points for {key}", route.len());
                    cache.put(key, route.clone());
                    return FetchOutcome::Fetched(route);
                }
                Err(RouteServiceError::RateLimited) => {}
                Err(e) => return failed(&key, e),
            }
        }
        failed(&key, RouteServiceError::RateLimited)
    }

    /// resolves the routes of all trips in batches of
    /// [`FetcherConfig::batch_size`]. the cache is persisted after each batch,
    /// then the fetcher waits [`FetcherConfig::batch_delay`] unless that was
    /// the final batch.
    ///
    /// a failed request does not stop the run. a failure to persist the
    /// cache does, since later batches could no longer be resumed.
    ///
    /// # Returns
    ///
    /// * one outcome per request, in input order, with their tally
    pub fn fetch_all(
        &self,
        requests: &[TripRequest],
        cache: &mut RouteCache,
    ) -> Result<FetchReport, FetchError> {
        let total = requests.len();
        let initial_cache_size = cache.len();
        log::info!("fetching routes for {total} trips");
        log::info!(
            "batch size: {}  |  delay between batches: {:?}",
            self.config.batch_size,
            self.config.batch_delay
        );
        log::info!(
            "estimated time (worst case, no cache): ~{:.1} min",
            self.config.estimated_duration(total).as_secs_f64() / 60.0
        );

        let mut report = FetchReport {
            outcomes: Vec::with_capacity(total),
            summary: FetchSummary::default(),
        };
        let mut done = 0;
        for batch in requests.chunks(self.config.batch_size) {
            for request in batch {
                let outcome = self.fetch(request, cache);
                report.summary.record(&outcome);
                report.outcomes.push(outcome);
            }
            cache.persist()?;

            done += batch.len();
            log::info!(
                "[{done:>4}/{total}]  cache size: {}  (+{} new routes fetched)",
                cache.len(),
                cache.len().saturating_sub(initial_cache_size)
            );
            if done < total {
                log::info!("waiting {:?}...", self.config.batch_delay);
                self.pause.pause(self.config.batch_delay);
            }
        }

        log::info!("{}", report.summary);
        Ok(report)
    }
}

fn failed(key: &CacheKey, error: RouteServiceError) -> FetchOutcome {
    log::warn!("failed fetching route for {key}: {error}");
    FetchOutcome::Failed(error)
}
