use std::fmt::Display;

use trajagg_core::model::RoutePolyline;

use crate::service::RouteServiceError;

/// how a single trip request terminated. every request ends in exactly one
/// of these states.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// the route was already cached; no external call was made
    CacheHit(RoutePolyline),
    /// the route was fetched from the routing service and cached
    Fetched(RoutePolyline),
    /// the route could not be fetched. the trip contributes nothing downstream.
    Failed(RouteServiceError),
}

impl FetchOutcome {
    pub fn route(&self) -> Option<&RoutePolyline> {
        match self {
            FetchOutcome::CacheHit(route) => Some(route),
            FetchOutcome::Fetched(route) => Some(route),
            FetchOutcome::Failed(_) => None,
        }
    }

    pub fn into_route(self) -> Option<RoutePolyline> {
        match self {
            FetchOutcome::CacheHit(route) => Some(route),
            FetchOutcome::Fetched(route) => Some(route),
            FetchOutcome::Failed(_) => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }
}

/// tally of outcomes across a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub cache_hits: usize,
    pub fetched: usize,
    pub failed: usize,
}

impl FetchSummary {
    pub fn record(&mut self, outcome: &FetchOutcome) {
        match outcome {
            FetchOutcome::CacheHit(_) => self.cache_hits += 1,
            FetchOutcome::Fetched(_) => self.fetched += 1,
            FetchOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.cache_hits + self.fetched + self.failed
    }
}

impl Display for FetchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} trips: {} cache hits, {} fetched, {} failed",
            self.total(),
            self.cache_hits,
            self.fetched,
            self.failed
        )
    }
}

/// outcomes of a batched fetch, in the order of the input requests
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    pub outcomes: Vec<FetchOutcome>,
    pub summary: FetchSummary,
}
