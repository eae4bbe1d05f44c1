//! Query interface to UI elements.
//!
//! The automation driver is an external collaborator. It exposes each element
//! through [`Element`], and the waits only ever observe element state through
//! these methods.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// On-screen position sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Bit-for-bit equality of both coordinates.
    pub fn same_as(&self, other: &Point) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

#[async_trait]
pub trait Element: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn is_enabled(&self) -> Result<bool, Self::Error>;

    async fn is_visible(&self) -> Result<bool, Self::Error>;

    /// Current position, or `None` when the driver cannot report one.
    async fn position(&self) -> Result<Option<Point>, Self::Error>;

    async fn tap(&self) -> Result<(), Self::Error>;

    /// Human-readable identification used in diagnostics.
    fn describe(&self) -> String {
        "element".to_string()
    }
}
