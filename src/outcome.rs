// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fallible-result container.
//!
//! `Outcome<T, E>` records that an operation either produced a value or
//! failed with an error. Exactly one slot is populated, and the factory
//! called decides which. Nothing ever re-routes a value based on how
//! "empty" it looks: `ok(0)` and `ok("")` are successes, and an error whose
//! rendering is the empty string is still an error.
//!
//! # Failure channel
//!
//! | Operation    | On the wrong variant | Panic payload |
//! |--------------|----------------------|---------------|
//! | `unwrap`     | panics               | the stored error value itself |
//! | `expect`     | panics               | [`UnwrapError`], message `{msg}: {error}` |
//! | `expect_err` | panics               | [`UnwrapError`], message `{msg}: {value}` |
//!
//! [`Outcome::unwrap`] re-raises the stored error with its type intact
//! rather than flattening it to text. A `catch_unwind` boundary downcasts
//! the payload back to `E` and recovers the original value, which is why
//! the method asks for `E: Any + Send` instead of `E: Debug`.
//!
//! The message-forming operations only format on their failure path. A
//! successful `expect` never renders the error slot, and a failed
//! `expect_err` never renders the value slot.

use std::any::Any;
use std::fmt;
use std::panic::panic_any;

use crate::error::UnwrapError;

/// The result of a fallible operation: a value or an error, never both.
///
/// Mirrors `std::result::Result` in shape and derive surface, with a
/// deliberately closed operation set: predicates and extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The operation produced a value.
    Ok(T),
    /// The operation failed with an error.
    Err(E),
}

/// Construct a success around `value`.
///
/// The value slot is tagged unconditionally. Zero, empty, and false values
/// are successes like any other.
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Construct a failure around `error`.
///
/// The error slot is tagged unconditionally, whatever the error value
/// looks like.
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

impl<T, E> Outcome<T, E> {
    /// Whether the operation succeeded.
    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Whether the operation failed. Always the negation of
    /// [`Outcome::is_ok`].
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Move the success value out, re-raising the stored error if the
    /// operation failed.
    ///
    /// # Panics
    ///
    /// Panics on the error variant. The panic payload is the error value
    /// itself, moved out with its type intact; downcast it back to `E` at a
    /// [`std::panic::catch_unwind`] boundary to recover it.
    pub fn unwrap(self) -> T
    where
        E: Any + Send,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => panic_any(error),
        }
    }

    /// Move the success value out, panicking with `msg` and the rendered
    /// error if the operation failed.
    ///
    /// No formatting happens on the success path.
    ///
    /// # Panics
    ///
    /// Panics on the error variant. The panic payload is an
    /// [`UnwrapError`] with the message `{msg}: {error}`, where the error
    /// is rendered through its `Display` impl.
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Display,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => panic_any(UnwrapError::new(format!("{}: {}", msg, error))),
        }
    }

    /// Move the error out, panicking with `msg` and the rendered value if
    /// the operation succeeded.
    ///
    /// The dual of [`Outcome::expect`], for callers that require failure.
    /// No formatting happens on the error path.
    ///
    /// # Panics
    ///
    /// Panics on the success variant. The panic payload is an
    /// [`UnwrapError`] with the message `{msg}: {value}`.
    pub fn expect_err(self, msg: &str) -> E
    where
        T: fmt::Display,
    {
        match self {
            Outcome::Ok(value) => panic_any(UnwrapError::new(format!("{}: {}", msg, value))),
            Outcome::Err(error) => error,
        }
    }

    /// Move the success value out, or fall back to `default`. Never
    /// panics, and never inspects the error beyond its tag.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => default,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(x) => Outcome::Ok(x),
            Err(e) => Outcome::Err(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        match value {
            Outcome::Ok(x) => Ok(x),
            Outcome::Err(e) => Err(e),
        }
    }
}


// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================
//
// Run with: cargo kani
//
// Verified properties:
// 1. is_ok / is_err partition the two variants exactly
// 2. ok(x).unwrap() == x for all x
// 3. unwrap_or never panics and picks the right branch

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify the predicates partition the variants for any payload.
    #[kani::proof]
    fn verify_variant_partition() {
        let value: u64 = kani::any();
        let success = ok::<u64, u32>(value);
        kani::assert(success.is_ok(), "ok() must report success");
        kani::assert(!success.is_err(), "ok() must not report failure");

        let code: u32 = kani::any();
        let failure = err::<u64, u32>(code);
        kani::assert(failure.is_err(), "err() must report failure");
        kani::assert(!failure.is_ok(), "err() must not report success");
    }

    /// Verify unwrap returns the exact stored value.
    #[kani::proof]
    fn verify_ok_unwrap_roundtrip() {
        let value: u64 = kani::any();
        kani::assert(
            ok::<u64, u32>(value).unwrap() == value,
            "unwrap must return the stored value",
        );
    }

    /// Verify the safe extractor never panics and picks the right branch.
    #[kani::proof]
    fn verify_unwrap_or_total() {
        let value: u32 = kani::any();
        let code: u32 = kani::any();
        let default: u32 = kani::any();

        kani::assert(
            ok::<u32, u32>(value).unwrap_or(default) == value,
            "a success wins over the default",
        );
        kani::assert(
            err::<u32, u32>(code).unwrap_or(default) == default,
            "the default fills a failure",
        );
    }
}
