//! Wait until an element reports itself enabled.

use crate::clock::Clock;
use crate::config::PollConfig;
use crate::element::Element;
use crate::error::WaitError;
use crate::poller::Poller;

impl<C: Clock> Poller<C> {
    /// Poll `target.is_enabled()` every `config.interval` until it is true.
    ///
    /// Unlike [`Poller::wait_until`] the sleep is never shortened near the
    /// deadline, so a failing wait can overrun `config.timeout` by up to one
    /// interval.
    pub async fn wait_for_enabled<T>(
        &self,
        target: &T,
        config: &PollConfig,
    ) -> Result<(), WaitError<T::Error>>
    where
        T: Element + ?Sized,
    {
        let start = self.clock().now();

        loop {
            if target.is_enabled().await.map_err(WaitError::Predicate)? {
                return Ok(());
            }

            if self.clock().now().duration_since(start) >= config.timeout {
                tracing::debug!(
                    target_element = %target.describe(),
                    timeout_ms = config.timeout.as_millis() as u64,
                    "Element not enabled"
                );
                return Err(WaitError::ElementNotEnabled {
                    timeout: config.timeout,
                });
            }

            self.suspend(config.interval).await;
        }
    }
}

/// [`Poller::wait_for_enabled`] on the tokio clock.
pub async fn wait_for_enabled<T>(target: &T, config: &PollConfig) -> Result<(), WaitError<T::Error>>
where
    T: Element + ?Sized,
{
    Poller::new().wait_for_enabled(target, config).await
}
