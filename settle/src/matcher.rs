//! Partial matching of JSON state snapshots.
//!
//! `object_contains(actual, expected)` holds when overlaying `expected` onto
//! `actual` leaves `actual` unchanged: every top-level key of `expected` is
//! present in `actual` with a deeply equal value, and extra keys in `actual`
//! are ignored.

use std::cell::RefCell;
use std::future::Future;

use serde_json::Value;

use crate::clock::Clock;
use crate::config::PollConfig;
use crate::error::WaitError;
use crate::poller::Poller;

pub fn object_contains(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Object(actual), Value::Object(expected)) => expected
            .iter()
            .all(|(key, value)| actual.get(key) == Some(value)),
        _ => actual == expected,
    }
}

/// Keys of `expected` that are missing from or different in `actual`, sorted.
///
/// Empty when [`object_contains`] holds. For non-object operands that differ
/// the result is a single empty key.
pub fn mismatched_keys(actual: &Value, expected: &Value) -> Vec<String> {
    match (actual, expected) {
        (Value::Object(actual), Value::Object(expected)) => {
            let mut keys: Vec<String> = expected
                .iter()
                .filter(|(key, value)| actual.get(key.as_str()) != Some(*value))
                .map(|(key, _)| key.clone())
                .collect();
            keys.sort();
            keys
        }
        _ if actual == expected => Vec::new(),
        _ => vec![String::new()],
    }
}

/// Poll `fetch` until the snapshot it returns contains `expected`.
///
/// Fetch errors abort the wait. On timeout the keys that still differ are
/// logged.
pub async fn wait_for_match<C, F, Fut, E>(
    poller: &Poller<C>,
    mut fetch: F,
    expected: &Value,
    config: &PollConfig,
) -> Result<(), WaitError<E>>
where
    C: Clock,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Value, E>>,
{
    let last: RefCell<Option<Value>> = RefCell::new(None);
    let result = poller
        .wait_until(
            || {
                let snapshot = fetch();
                let last = &last;
                async move {
                    let snapshot = snapshot.await?;
                    let matched = object_contains(&snapshot, expected);
                    *last.borrow_mut() = Some(snapshot);
                    Ok::<bool, E>(matched)
                }
            },
            config,
        )
        .await;

    if result.as_ref().is_err_and(WaitError::is_timeout)
        && let Some(snapshot) = last.borrow().as_ref()
    {
        tracing::debug!(
            mismatched = ?mismatched_keys(snapshot, expected),
            "State never matched"
        );
    }
    result
}
