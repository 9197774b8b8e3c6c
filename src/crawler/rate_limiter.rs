//! Random pause between visits

use crate::config::TraversalPolicy;
use crate::crawler::random::RandomSource;
use std::time::Duration;

/// Inserts a random delay between visits
///
/// Bounds are always milliseconds. A `max_sleep` of zero disables sleeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimiter {
    min_sleep: u64,
    max_sleep: u64,
}

impl RateLimiter {
    pub fn new(min_sleep_ms: u64, max_sleep_ms: u64) -> Self {
        Self {
            min_sleep: min_sleep_ms,
            max_sleep: max_sleep_ms,
        }
    }

    pub fn from_policy(policy: &TraversalPolicy) -> Self {
        Self::new(policy.min_sleep, policy.max_sleep)
    }

    /// Draws the next delay, or `None` if sleeping is disabled
    ///
    /// The delay is uniform in `[min_sleep, max_sleep)`. When the range is
    /// empty the delay is exactly `max_sleep`.
    pub fn next_delay<R: RandomSource + ?Sized>(&self, rng: &R) -> Option<Duration> {
        if self.max_sleep == 0 {
            return None;
        }

        let millis = if self.min_sleep < self.max_sleep {
            rng.next_in_range(self.min_sleep..self.max_sleep)
        } else {
            self.max_sleep
        };

        Some(Duration::from_millis(millis))
    }

    /// Sleeps for a random delay and returns how long it slept
    pub async fn wait<R: RandomSource + ?Sized>(&self, rng: &R) -> Duration {
        match self.next_delay(rng) {
            Some(delay) => {
                tracing::trace!("Sleeping for {:?}", delay);
                tokio::time::sleep(delay).await;
                delay
            }
            None => Duration::ZERO,
        }
    }
}
