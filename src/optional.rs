// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The optional-value container.
//!
//! `Optional<T>` holds exactly one value or nothing, and the variant tag is
//! the only source of truth for which. Presence never depends on what the
//! payload looks like: `some(0)`, `some("")`, and `some(false)` are as
//! present as any other value. If you have ever lost an afternoon to a
//! config layer that treated port `0` as "not configured", this is the type
//! that rules the bug out.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Mutual exclusivity**: a container is `Some` or `None`, never both,
//!   never neither. The enum representation makes the other states
//!   unconstructible.
//! - **Tag authority**: [`some`] always produces a present container and
//!   [`none`] always an absent one. No operation inspects the payload to
//!   decide presence.
//! - **Fail loud**: [`Optional::unwrap`] and [`Optional::expect`] panic on
//!   absence with an [`UnwrapError`] payload. The safe extractors
//!   ([`Optional::unwrap_or`], [`Optional::unwrap_or_else`]) never panic.
//!
//! # Failure channel
//!
//! | Operation | On `None` | Payload message |
//! |-----------|-----------|-----------------|
//! | `unwrap`  | panics    | `failed to unwrap value` |
//! | `expect`  | panics    | the caller's message, verbatim |
//!
//! The payload is a typed [`UnwrapError`], not a string, so a
//! `catch_unwind` boundary can downcast it and read the message back.

use std::panic::panic_any;

use crate::error::UnwrapError;

/// A value that is explicitly present or explicitly absent.
///
/// Mirrors `std::option::Option` in shape and in derive surface, with a
/// deliberately closed operation set: predicates, extraction, and a
/// containment check. Transformation combinators are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// A value is present.
    Some(T),
    /// No value.
    None,
}

/// Construct a present container around `value`.
///
/// The payload is stored as given. Zero, empty, and false values are
/// present like any other.
pub fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}

/// Construct an absent container.
pub fn none<T>() -> Optional<T> {
    Optional::None
}

impl<T> Optional<T> {
    /// Whether a value is present.
    pub const fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    /// Whether the container is empty. Always the negation of
    /// [`Optional::is_some`].
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Move the value out, panicking if there is none.
    ///
    /// # Panics
    ///
    /// Panics on an empty container. The panic payload is an
    /// [`UnwrapError`] with the message `failed to unwrap value`.
    pub fn unwrap(self) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => panic_any(UnwrapError::new("failed to unwrap value")),
        }
    }

    /// Move the value out, panicking with `msg` if there is none.
    ///
    /// The message is only copied on the failure path; a present container
    /// pays nothing for it.
    ///
    /// # Panics
    ///
    /// Panics on an empty container. The panic payload is an
    /// [`UnwrapError`] carrying `msg` verbatim.
    pub fn expect(self, msg: &str) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => panic_any(UnwrapError::new(msg)),
        }
    }

    /// Move the value out, or fall back to `default`. Never panics.
    ///
    /// `default` is evaluated eagerly at the call site. Reach for
    /// [`Optional::unwrap_or_else`] when building it is expensive.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => default,
        }
    }

    /// Move the value out, or build a fallback with `f`. Never panics.
    ///
    /// `f` runs synchronously, at most once, and only when the container is
    /// empty.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => f(),
        }
    }
}

impl<T: PartialEq> Optional<T> {
    /// Whether both containers are populated and their payloads compare
    /// equal.
    ///
    /// Absence on either side is an automatic `false`; two empty containers
    /// hold nothing to compare. Equality is the payload type's `PartialEq`,
    /// nothing else.
    pub fn contains(&self, other: &Optional<T>) -> bool {
        match (self, other) {
            (Optional::Some(a), Optional::Some(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => Optional::Some(x),
            None => Optional::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Some(x) => Some(x),
            Optional::None => None,
        }
    }
}


// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================
//
// These proofs provide mathematical certainty over every payload bit
// pattern, not just sampled ones. Run with: cargo kani
//
// Verified properties:
// 1. is_some / is_none partition the two variants exactly
// 2. some(x).unwrap() == x for all x
// 3. unwrap_or / unwrap_or_else never panic and pick the right branch
// 4. contains is payload equality gated on double presence

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify the predicates partition the variants for any payload.
    #[kani::proof]
    fn verify_variant_partition() {
        let value: u64 = kani::any();
        let present = some(value);
        kani::assert(present.is_some(), "some() must report presence");
        kani::assert(!present.is_none(), "some() must not report absence");

        let absent = none::<u64>();
        kani::assert(absent.is_none(), "none() must report absence");
        kani::assert(!absent.is_some(), "none() must not report presence");
    }

    /// Verify unwrap returns the exact stored payload.
    #[kani::proof]
    fn verify_some_unwrap_roundtrip() {
        let value: u64 = kani::any();
        kani::assert(some(value).unwrap() == value, "unwrap must return the stored payload");
    }

    /// Verify the safe extractors never panic and pick the right branch.
    #[kani::proof]
    fn verify_safe_extractors_total() {
        let value: u32 = kani::any();
        let default: u32 = kani::any();

        kani::assert(
            some(value).unwrap_or(default) == value,
            "a present payload wins over the default",
        );
        kani::assert(
            none::<u32>().unwrap_or(default) == default,
            "the default fills absence",
        );
        kani::assert(
            some(value).unwrap_or_else(|| default) == value,
            "a present payload skips the fallback",
        );
        kani::assert(
            none::<u32>().unwrap_or_else(|| default) == default,
            "the fallback fills absence",
        );
    }

    /// Verify containment is payload equality gated on double presence.
    #[kani::proof]
    fn verify_contains_grid() {
        let a: u16 = kani::any();
        let b: u16 = kani::any();

        kani::assert(
            some(a).contains(&some(b)) == (a == b),
            "two present containers compare payloads",
        );
        kani::assert(!some(a).contains(&none()), "absence on the right is false");
        kani::assert(!none::<u16>().contains(&some(b)), "absence on the left is false");
        kani::assert(
            !none::<u16>().contains(&none()),
            "double absence holds nothing to compare",
        );
    }
}
