//! Test doubles shared across module tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::element::{Element, Point};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("fake driver error: {0}")]
pub struct FakeError(pub String);

impl FakeError {
    pub fn new(message: &str) -> Self {
        Self(message.to_string())
    }
}

/// Scripted answers; the last one repeats once the script runs out.
pub struct Script<T> {
    items: Vec<T>,
    cursor: usize,
}

impl<T: Clone> Script<T> {
    pub fn new(items: Vec<T>) -> Self {
        assert!(!items.is_empty(), "script needs at least one item");
        Self { items, cursor: 0 }
    }

    pub fn next(&mut self) -> T {
        let index = self.cursor.min(self.items.len() - 1);
        self.cursor += 1;
        self.items[index].clone()
    }

    pub fn calls(&self) -> usize {
        self.cursor
    }
}

pub struct FakeElement {
    enabled: Mutex<Script<Result<bool, FakeError>>>,
    visible: Mutex<Script<Result<bool, FakeError>>>,
    positions: Mutex<Script<Result<Option<Point>, FakeError>>>,
    taps: AtomicUsize,
}

impl FakeElement {
    pub fn new() -> Self {
        Self {
            enabled: Mutex::new(Script::new(vec![Ok(true)])),
            visible: Mutex::new(Script::new(vec![Ok(true)])),
            positions: Mutex::new(Script::new(vec![Ok(Some(Point::new(0.0, 0.0)))])),
            taps: AtomicUsize::new(0),
        }
    }

    pub fn enabled(self, answers: Vec<Result<bool, FakeError>>) -> Self {
        *self.enabled.lock().unwrap() = Script::new(answers);
        self
    }

    pub fn visible(self, answers: Vec<Result<bool, FakeError>>) -> Self {
        *self.visible.lock().unwrap() = Script::new(answers);
        self
    }

    pub fn positions(self, answers: Vec<Result<Option<Point>, FakeError>>) -> Self {
        *self.positions.lock().unwrap() = Script::new(answers);
        self
    }

    pub fn enabled_calls(&self) -> usize {
        self.enabled.lock().unwrap().calls()
    }

    pub fn taps(&self) -> usize {
        self.taps.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Element for FakeElement {
    type Error = FakeError;

    async fn is_enabled(&self) -> Result<bool, FakeError> {
        self.enabled.lock().unwrap().next()
    }

    async fn is_visible(&self) -> Result<bool, FakeError> {
        self.visible.lock().unwrap().next()
    }

    async fn position(&self) -> Result<Option<Point>, FakeError> {
        self.positions.lock().unwrap().next()
    }

    async fn tap(&self) -> Result<(), FakeError> {
        self.taps.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        "fake-button".to_string()
    }
}
