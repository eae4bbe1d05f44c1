//! Errors returned by waits.

use std::convert::Infallible;
use std::time::Duration;

/// Failure of a wait.
///
/// `E` is the error type of the caller-supplied predicate, sampler or element
/// query. Waits that never surface caller errors use the default
/// `Infallible`.
#[derive(Debug, thiserror::Error)]
pub enum WaitError<E = Infallible> {
    #[error("condition not met within {}ms", .timeout.as_millis())]
    ConditionTimeout { timeout: Duration },

    #[error("value did not stabilize within {}ms", .timeout.as_millis())]
    StabilityTimeout { timeout: Duration },

    #[error("target not enabled within {}ms", .timeout.as_millis())]
    ElementNotEnabled { timeout: Duration },

    /// Error raised by a caller-supplied predicate, sampler or element
    /// operation, passed through unchanged.
    #[error(transparent)]
    Predicate(E),
}

impl<E> WaitError<E> {
    pub fn is_timeout(&self) -> bool {
        !matches!(self, Self::Predicate(_))
    }

    /// The configured timeout that elapsed, if this is a timeout.
    pub fn timeout(&self) -> Option<Duration> {
        match self {
            Self::ConditionTimeout { timeout }
            | Self::StabilityTimeout { timeout }
            | Self::ElementNotEnabled { timeout } => Some(*timeout),
            Self::Predicate(_) => None,
        }
    }

    pub fn into_predicate(self) -> Option<E> {
        match self {
            Self::Predicate(e) => Some(e),
            _ => None,
        }
    }
}

impl WaitError<Infallible> {
    /// Lift an error that cannot carry a caller error into any `WaitError<E>`.
    pub fn widen<E>(self) -> WaitError<E> {
        match self {
            Self::ConditionTimeout { timeout } => WaitError::ConditionTimeout { timeout },
            Self::StabilityTimeout { timeout } => WaitError::StabilityTimeout { timeout },
            Self::ElementNotEnabled { timeout } => WaitError::ElementNotEnabled { timeout },
            Self::Predicate(never) => match never {},
        }
    }
}
