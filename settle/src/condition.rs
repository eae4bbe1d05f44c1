//! Wait until an async predicate holds.

use std::future::Future;

use crate::clock::Clock;
use crate::config::PollConfig;
use crate::error::WaitError;
use crate::poller::Poller;

impl<C: Clock> Poller<C> {
    /// Evaluate `condition` until it returns `true` or `config.timeout` elapses.
    ///
    /// The deadline is fixed when the call starts. Between attempts the task
    /// sleeps for `config.interval`, shortened so the last sleep ends at the
    /// deadline. A `true` on the first attempt returns without suspending.
    ///
    /// Errors from `condition` abort the wait immediately and come back as
    /// [`WaitError::Predicate`].
    pub async fn wait_until<F, Fut, E>(
        &self,
        mut condition: F,
        config: &PollConfig,
    ) -> Result<(), WaitError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<bool, E>>,
    {
        let start = self.clock().now();
        let deadline = start + config.timeout;
        let mut attempts: u64 = 0;

        loop {
            attempts = attempts.saturating_add(1);
            if condition().await.map_err(WaitError::Predicate)? {
                tracing::trace!(attempts, "Condition met");
                return Ok(());
            }

            let now = self.clock().now();
            if now >= deadline {
                tracing::debug!(
                    attempts,
                    timeout_ms = config.timeout.as_millis() as u64,
                    "Condition timed out"
                );
                return Err(WaitError::ConditionTimeout {
                    timeout: config.timeout,
                });
            }

            let wait = config.interval.min(deadline.saturating_duration_since(now));
            self.suspend(wait).await;
        }
    }
}

/// [`Poller::wait_until`] on the tokio clock.
pub async fn wait_until<F, Fut, E>(condition: F, config: &PollConfig) -> Result<(), WaitError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    Poller::new().wait_until(condition, config).await
}
