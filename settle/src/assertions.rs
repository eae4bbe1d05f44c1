//! Visibility assertions for test code.
//!
//! Both helpers are condition waits over [`Element::is_visible`]; a timeout is
//! reported as [`WaitError::ConditionTimeout`].

use crate::clock::Clock;
use crate::config::PollConfig;
use crate::element::Element;
use crate::error::WaitError;
use crate::poller::Poller;

pub async fn wait_for_visible<C, T>(
    poller: &Poller<C>,
    element: &T,
    config: &PollConfig,
) -> Result<(), WaitError<T::Error>>
where
    C: Clock,
    T: Element + ?Sized,
{
    let result = poller.wait_until(move || element.is_visible(), config).await;
    if let Err(WaitError::ConditionTimeout { timeout }) = &result {
        tracing::warn!(
            element = %element.describe(),
            timeout_ms = timeout.as_millis() as u64,
            "Element never became visible"
        );
    }
    result
}

pub async fn wait_for_not_visible<C, T>(
    poller: &Poller<C>,
    element: &T,
    config: &PollConfig,
) -> Result<(), WaitError<T::Error>>
where
    C: Clock,
    T: Element + ?Sized,
{
    let result = poller
        .wait_until(
            move || async move { element.is_visible().await.map(|visible| !visible) },
            config,
        )
        .await;
    if let Err(WaitError::ConditionTimeout { timeout }) = &result {
        tracing::warn!(
            element = %element.describe(),
            timeout_ms = timeout.as_millis() as u64,
            "Element still visible"
        );
    }
    result
}
