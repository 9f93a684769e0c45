use governor::clock::{Clock, DefaultClock};
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::thread;

pub type Limiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// The public Nominatim usage policy allows one request per second.
pub fn nominatim_limiter() -> Limiter {
    per_second(NonZeroU32::MIN)
}

pub fn per_second(requests: NonZeroU32) -> Limiter {
    Arc::new(RateLimiter::direct(Quota::per_second(requests)))
}

/// Blocks the calling thread until the limiter admits one more request.
pub fn wait(limiter: &Limiter) {
    let clock = DefaultClock::default();
    while let Err(not_until) = limiter.check() {
        thread::sleep(not_until.wait_time_from(clock.now()));
    }
}
