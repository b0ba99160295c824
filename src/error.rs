// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The failure payload raised when an extraction finds the wrong variant.
//!
//! Three operations synthesize this error: [`Optional::unwrap`] on an empty
//! container, [`Optional::expect`] on an empty container, and the
//! `expect`/`expect_err` pair on [`Outcome`] when the inspected slot is not
//! the one the caller demanded. In every case the error travels as the panic
//! payload, so a [`std::panic::catch_unwind`] boundary can downcast it and
//! read the exact message.
//!
//! `Outcome::unwrap` is the deliberate exception: it re-raises the stored
//! error value itself, not an `UnwrapError`. See [`Outcome::unwrap`].
//!
//! [`Optional::unwrap`]: crate::Optional::unwrap
//! [`Optional::expect`]: crate::Optional::expect
//! [`Outcome`]: crate::Outcome
//! [`Outcome::unwrap`]: crate::Outcome::unwrap

use std::fmt;

/// Error describing a failed extraction.
///
/// Compares by message, so tests can assert the exact text that reached the
/// panic boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrapError {
    message: String,
}

impl UnwrapError {
    /// Create an error carrying `message` verbatim.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message, exactly as raised.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for UnwrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for UnwrapError {}
