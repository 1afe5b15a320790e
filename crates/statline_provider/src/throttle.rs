//! Request spacing for the remote provider.
//!
//! Uses governor's GCRA limiter. Waiting is the only behavior: a throttled
//! request is delayed, never rejected or retried.

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Optional requests-per-minute limiter shared by clones.
#[derive(Clone, Default)]
pub struct RequestThrottle {
    limiter: Option<Arc<DirectRateLimiter>>,
}

impl RequestThrottle {
    /// Throttle allowing `requests_per_minute`; `None` or zero disables it.
    pub fn new(requests_per_minute: Option<u32>) -> Self {
        let limiter = requests_per_minute
            .and_then(NonZeroU32::new)
            .map(|n| Arc::new(RateLimiter::direct(Quota::per_minute(n))));
        Self { limiter }
    }

    /// Throttle that never waits.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Whether a limit is configured.
    pub fn is_limited(&self) -> bool {
        self.limiter.is_some()
    }

    /// Wait until the next request may be sent.
    pub async fn acquire(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }
}

impl std::fmt::Debug for RequestThrottle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestThrottle")
            .field("limited", &self.is_limited())
            .finish()
    }
}
