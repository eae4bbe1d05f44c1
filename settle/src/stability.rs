//! Wait until a sampled position stops changing.

use std::fmt::Display;
use std::future::Future;

use crate::clock::Clock;
use crate::config::StabilityConfig;
use crate::element::Point;
use crate::error::WaitError;
use crate::poller::Poller;

impl<C: Clock> Poller<C> {
    /// Sample a position until `config.stable_count` consecutive samples are
    /// identical, or fail with [`WaitError::StabilityTimeout`].
    ///
    /// A sample that cannot be taken (`Ok(None)` or an error from `sample`)
    /// ends the wait successfully after a single `config.fallback_delay`. The
    /// sampler error is logged and dropped.
    pub async fn wait_for_stability<F, Fut, E>(
        &self,
        mut sample: F,
        config: &StabilityConfig,
    ) -> Result<(), WaitError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<Point>, E>>,
        E: Display,
    {
        let start = self.clock().now();
        let required = config.stable_count.get();
        let mut baseline: Option<Point> = None;
        let mut stable_checks: u32 = 0;

        while self.clock().now().duration_since(start) < config.timeout {
            let current = match sample().await {
                Ok(Some(point)) => point,
                Ok(None) => {
                    tracing::debug!("Position unavailable, skipping stability wait");
                    self.clock().sleep(config.fallback_delay).await;
                    return Ok(());
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Position sample failed, skipping stability wait");
                    self.clock().sleep(config.fallback_delay).await;
                    return Ok(());
                }
            };

            match baseline {
                Some(previous) if previous.same_as(&current) => stable_checks += 1,
                _ => {
                    baseline = Some(current);
                    stable_checks = 1;
                }
            }

            if stable_checks >= required {
                tracing::trace!(x = current.x, y = current.y, "Position stable");
                return Ok(());
            }

            self.suspend(config.interval).await;
        }

        tracing::debug!(
            timeout_ms = config.timeout.as_millis() as u64,
            stable_checks,
            required,
            "Position did not stabilize"
        );
        Err(WaitError::StabilityTimeout {
            timeout: config.timeout,
        })
    }
}

/// [`Poller::wait_for_stability`] on the tokio clock.
pub async fn wait_for_stability<F, Fut, E>(
    sample: F,
    config: &StabilityConfig,
) -> Result<(), WaitError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<Point>, E>>,
    E: Display,
{
    Poller::new().wait_for_stability(sample, config).await
}
