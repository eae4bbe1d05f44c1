//! Gestures that wait for the target to settle first.

use crate::clock::Clock;
use crate::config::{PollConfig, StabilityConfig};
use crate::element::Element;
use crate::error::WaitError;
use crate::poller::Poller;

/// Tap `element` once its position is stable and it reports itself enabled.
///
/// Each stage's error is returned as-is; a failing tap comes back as
/// [`WaitError::Predicate`]. Nothing is tapped if a wait fails.
pub async fn tap_when_settled<C, T>(
    poller: &Poller<C>,
    element: &T,
    stability: &StabilityConfig,
    enabled: &PollConfig,
) -> Result<(), WaitError<T::Error>>
where
    C: Clock,
    T: Element + ?Sized,
{
    poller
        .wait_for_stability(move || element.position(), stability)
        .await
        .map_err(|e| e.widen())?;
    poller.wait_for_enabled(element, enabled).await?;

    tracing::debug!(element = %element.describe(), "Tapping settled element");
    element.tap().await.map_err(WaitError::Predicate)
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;
    use std::time::Duration;

    use super::*;
    use crate::clock::ManualClock;
    use crate::element::Point;
    use crate::testing::FakeElement;

    fn stability(timeout_ms: u64) -> StabilityConfig {
        StabilityConfig::new(
            Duration::from_millis(timeout_ms),
            Duration::from_millis(100),
            NonZeroU32::new(2).unwrap(),
        )
    }

    fn enabled(timeout_ms: u64) -> PollConfig {
        PollConfig::new(Duration::from_millis(100), Duration::from_millis(timeout_ms))
    }

    #[tokio::test]
    async fn taps_once_after_settling() {
        let clock = ManualClock::new();
        let poller = Poller::with_clock(clock.clone());
        let element = FakeElement::new()
            .positions(vec![
                Ok(Some(Point::new(0.0, 300.0))),
                Ok(Some(Point::new(0.0, 120.0))),
                Ok(Some(Point::new(0.0, 120.0))),
            ])
            .enabled(vec![Ok(false), Ok(true)]);
        let start = clock.now();

        tap_when_settled(&poller, &element, &stability(1_000), &enabled(1_000))
            .await
            .unwrap();

        assert_eq!(element.taps(), 1);
        // 200ms settling, then one 100ms enabled poll.
        assert_eq!(clock.now() - start, Duration::from_millis(300));
    }

    #[tokio::test]
    async fn does_not_tap_disabled_element() {
        let poller = Poller::with_clock(ManualClock::new());
        let element = FakeElement::new().enabled(vec![Ok(false)]);

        let err = tap_when_settled(&poller, &element, &stability(1_000), &enabled(200))
            .await
            .unwrap_err();

        assert!(matches!(err, WaitError::ElementNotEnabled { .. }));
        assert_eq!(element.taps(), 0);
    }

    #[tokio::test]
    async fn moving_element_is_a_stability_timeout() {
        let poller = Poller::with_clock(ManualClock::new());
        let element = FakeElement::new().positions(vec![
            Ok(Some(Point::new(0.0, 1.0))),
            Ok(Some(Point::new(0.0, 2.0))),
            Ok(Some(Point::new(0.0, 3.0))),
            Ok(Some(Point::new(0.0, 4.0))),
        ]);

        let err = tap_when_settled(&poller, &element, &stability(250), &enabled(1_000))
            .await
            .unwrap_err();

        assert!(matches!(err, WaitError::StabilityTimeout { .. }));
        assert_eq!(element.taps(), 0);
    }

    #[tokio::test]
    async fn unknown_position_still_taps() {
        let poller = Poller::with_clock(ManualClock::new());
        let element = FakeElement::new().positions(vec![Ok(None)]);

        tap_when_settled(&poller, &element, &stability(1_000), &enabled(1_000))
            .await
            .unwrap();

        assert_eq!(element.taps(), 1);
    }
}
