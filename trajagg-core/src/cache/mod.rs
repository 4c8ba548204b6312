mod cache_error;
mod route_cache;

pub use cache_error::CacheError;
pub use route_cache::RouteCache;
