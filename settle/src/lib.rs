//! settle: async waits for end-to-end UI tests.

mod clock;
mod condition;
mod config;
mod enabled;
mod error;
mod poller;
mod stability;

pub mod assertions;
pub mod element;
pub mod gestures;
pub mod matcher;
pub mod telemetry;

#[cfg(test)]
mod testing;

pub use clock::{Clock, MANUAL_TICK, ManualClock, TokioClock};
pub use condition::wait_until;
pub use config::{PollConfig, StabilityConfig};
pub use element::{Element, Point};
pub use enabled::wait_for_enabled;
pub use error::WaitError;
pub use poller::Poller;
pub use stability::wait_for_stability;
