//! The [`Poller`] handle shared by every wait.
//!
//! The waits themselves live next to their semantics: `wait_until` in
//! `condition.rs`, `wait_for_stability` in `stability.rs` and
//! `wait_for_enabled` in `enabled.rs`.

use std::time::Duration;

use crate::clock::{Clock, TokioClock};

/// Runs waits against a [`Clock`].
///
/// A `Poller` holds no per-wait state, so one instance can drive any number
/// of concurrent waits.
#[derive(Debug, Clone, Default)]
pub struct Poller<C = TokioClock> {
    clock: C,
}

impl Poller<TokioClock> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> Poller<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Suspend between attempts. A zero wait still goes through
    /// [`Clock::yield_now`] so a poll with `interval == 0` cannot starve other
    /// tasks.
    pub(crate) async fn suspend(&self, wait: Duration) {
        if wait.is_zero() {
            self.clock.yield_now().await;
        } else {
            self.clock.sleep(wait).await;
        }
    }
}
