use std::time::Duration;

/// a fixed-duration wait. the fetcher only ever waits between batches and
/// after a rate-limit response.
pub trait Pause {
    fn pause(&self, duration: Duration);
}

/// pauses by sleeping the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
