//! Time sources for pollers.
//!
//! Every poll reads the current instant and suspends through a [`Clock`], so
//! tests can substitute a [`ManualClock`] (or run [`TokioClock`] under
//! `tokio::time::pause`) and observe exact elapsed times.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

#[async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;

    /// Suspend the calling task for `duration` without blocking the thread.
    async fn sleep(&self, duration: Duration);

    /// Give up the thread once between attempts that have no delay.
    async fn yield_now(&self) {
        tokio::task::yield_now().await;
    }
}

/// Wall clock backed by `tokio::time`.
///
/// Zero-length waits only yield and never move time, so a zero-interval poll
/// under `tokio::time::pause` does not reach its deadline. Use
/// [`ManualClock`] for those.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Time a [`ManualClock`] moves on each zero-length wait.
pub const MANUAL_TICK: Duration = Duration::from_millis(1);

/// Manually driven clock.
///
/// `sleep` advances the shared instant by the requested duration and yields
/// once, so a poll against a `ManualClock` finishes without real waiting while
/// still interleaving with other tasks. A zero-length wait advances by
/// [`MANUAL_TICK`], so zero-interval polls still reach their deadline.
/// Clones share the same instant.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, duration: Duration) {
        *self.lock() += duration;
    }

    fn lock(&self) -> MutexGuard<'_, Instant> {
        self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.lock()
    }

    async fn sleep(&self, duration: Duration) {
        self.advance(duration);
        tokio::task::yield_now().await;
    }

    async fn yield_now(&self) {
        self.advance(MANUAL_TICK);
        tokio::task::yield_now().await;
    }
}
