//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of panic-capture helpers so every
//! suite asserts failure payloads the same way.
//!
//! The helpers leave the default panic hook in place: suites run threaded
//! and the hook is process-global, so swapping it per call would race.
//! Expect a backtrace line on stderr for every captured panic.

#![doc(hidden)]

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::error::UnwrapError;

/// Run `f`, require it to panic, and hand back the raw panic payload.
///
/// Fails the calling test if `f` returns normally.
pub fn catch_payload<R>(f: impl FnOnce() -> R) -> Box<dyn Any + Send + 'static> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("expected a panic, but the closure returned"),
        Err(payload) => payload,
    }
}

/// Run `f`, require it to panic, and downcast the payload to [`UnwrapError`].
///
/// This is the canonical way to assert on synthesized extraction failures.
pub fn catch_unwrap_error<R>(f: impl FnOnce() -> R) -> UnwrapError {
    match catch_payload(f).downcast::<UnwrapError>() {
        Ok(error) => *error,
        Err(other) => panic!(
            "panic payload is not an UnwrapError: {}",
            describe_payload(&other)
        ),
    }
}

/// Run `f`, require it to panic, and downcast the payload to `E`.
///
/// This is the canonical way to assert that a re-raised error crossed the
/// panic boundary with its type intact.
pub fn catch_error<E: Any, R>(f: impl FnOnce() -> R) -> E {
    match catch_payload(f).downcast::<E>() {
        Ok(error) => *error,
        Err(other) => panic!(
            "panic payload is not the expected error type: {}",
            describe_payload(&other)
        ),
    }
}

fn describe_payload(payload: &(dyn Any + Send + 'static)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        format!("str payload {:?}", text)
    } else if let Some(text) = payload.downcast_ref::<String>() {
        format!("string payload {:?}", text)
    } else if let Some(error) = payload.downcast_ref::<UnwrapError>() {
        format!("UnwrapError payload {:?}", error.message())
    } else {
        String::from("opaque payload")
    }
}

/// Small error fixture with a stable rendering and value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestError(pub &'static str);

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for TestError {}

/// Display implementation that must never run.
///
/// Put this in the slot an operation is not allowed to render. If the
/// operation formats it anyway, the test dies with this message instead of
/// passing quietly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanicOnDisplay;

impl fmt::Display for PanicOnDisplay {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        panic!("Display ran on a path that must not format")
    }
}
