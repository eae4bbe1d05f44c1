//! Wait configuration.
//!
//! Defaults can be overridden per process through environment variables:
//! - `SETTLE_POLL_INTERVAL_MS` / `SETTLE_POLL_TIMEOUT_MS`
//! - `SETTLE_STABILITY_TIMEOUT_MS` / `SETTLE_STABILITY_INTERVAL_MS`
//! - `SETTLE_STABLE_COUNT`
//! - `SETTLE_STABILITY_FALLBACK_MS`
//!
//! Unparsable values fall back to the built-in default.

use std::num::NonZeroU32;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_POLL_INTERVAL_MS: u64 = 100;
const DEFAULT_POLL_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_STABILITY_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_STABILITY_INTERVAL_MS: u64 = 100;
const DEFAULT_STABLE_COUNT: u32 = 3;
const DEFAULT_STABILITY_FALLBACK_MS: u64 = 500;

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    lookup_or(|key| std::env::var(key).ok(), key, default)
}

fn lookup_or<T, L>(lookup: L, key: &str, default: T) -> T
where
    T: FromStr,
    L: FnOnce(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|s| s.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn env_millis(key: &str, default_ms: u64) -> Duration {
    Duration::from_millis(env_or(key, default_ms))
}

/// Interval and timeout for condition and enabled-state waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Delay between attempts. Zero still yields between attempts.
    pub interval: Duration,
    /// Total budget, measured from the start of the wait.
    pub timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: env_millis("SETTLE_POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS),
            timeout: env_millis("SETTLE_POLL_TIMEOUT_MS", DEFAULT_POLL_TIMEOUT_MS),
        }
    }
}

impl PollConfig {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Configuration for position stability waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StabilityConfig {
    pub timeout: Duration,
    pub interval: Duration,
    /// Consecutive identical samples required, counting the first one.
    pub stable_count: NonZeroU32,
    /// Delay taken once before giving up on an unavailable sample.
    pub fallback_delay: Duration,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        let stable_count = NonZeroU32::new(env_or("SETTLE_STABLE_COUNT", DEFAULT_STABLE_COUNT))
            .unwrap_or(NonZeroU32::MIN);

        Self {
            timeout: env_millis("SETTLE_STABILITY_TIMEOUT_MS", DEFAULT_STABILITY_TIMEOUT_MS),
            interval: env_millis("SETTLE_STABILITY_INTERVAL_MS", DEFAULT_STABILITY_INTERVAL_MS),
            stable_count,
            fallback_delay: env_millis(
                "SETTLE_STABILITY_FALLBACK_MS",
                DEFAULT_STABILITY_FALLBACK_MS,
            ),
        }
    }
}

impl StabilityConfig {
    pub fn new(timeout: Duration, interval: Duration, stable_count: NonZeroU32) -> Self {
        Self {
            timeout,
            interval,
            stable_count,
            fallback_delay: Duration::from_millis(DEFAULT_STABILITY_FALLBACK_MS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_stable_count(mut self, stable_count: NonZeroU32) -> Self {
        self.stable_count = stable_count;
        self
    }

    pub fn with_fallback_delay(mut self, fallback_delay: Duration) -> Self {
        self.fallback_delay = fallback_delay;
        self
    }
}
