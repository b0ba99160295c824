//! Explicit containers for optional and fallible values.
//!
//! This crate provides two small sum types that make presence and failure
//! impossible to confuse with the payload they carry. The variant tag is
//! authoritative: `some(0)` is present and `ok("")` is a success. An
//! absent or failed container stays that way no matter what a "falsy"
//! payload looks like.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐
//! │ optional.rs  │     │  outcome.rs  │
//! │ Optional<T>  │     │ Outcome<T,E> │
//! │ (some, none) │     │  (ok, err)   │
//! └──────┬───────┘     └──────┬───────┘
//!        │                    │
//!        ▼                    ▼
//! ┌─────────────────────────────────────┐
//! │              error.rs               │
//! │  (UnwrapError - the typed payload   │
//! │   carried by every failed unwrap)   │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Extraction at a glance
//!
//! | Operation        | Present / Ok     | Absent / Err                        |
//! |------------------|------------------|-------------------------------------|
//! | `unwrap`         | returns payload  | panics (typed payload, see below)   |
//! | `expect(msg)`    | returns payload  | panics, message includes `msg`      |
//! | `unwrap_or(d)`   | returns payload  | returns `d`, never panics           |
//! | `unwrap_or_else` | returns payload  | runs the fallback once (`Optional`) |
//!
//! Failed extractions panic with a *typed* payload rather than a plain
//! string: [`UnwrapError`] for synthesized failures, or the stored error
//! value itself for [`Outcome::unwrap`]. Trap them with
//! [`std::panic::catch_unwind`] and downcast to recover the message or the
//! original error. This only works under the default `panic = "unwind"`;
//! with `panic = "abort"` every failed extraction ends the process.
//!
//! # Usage
//!
//! ```
//! use arca::{err, none, ok, some, Outcome};
//!
//! // Presence is the tag, not the payload.
//! assert!(some(0).is_some());
//! assert_eq!(none::<u16>().unwrap_or(8080), 8080);
//!
//! // A failed lookup falls back without panicking.
//! let port: Outcome<u16, String> = err(String::from("missing key"));
//! assert_eq!(port.unwrap_or(8080), 8080);
//!
//! // A demanded failure hands the error back.
//! let port: Outcome<u16, String> = err(String::from("missing key"));
//! assert_eq!(port.expect_err("expected error"), "missing key");
//!
//! assert_eq!(ok::<u16, String>(42).unwrap(), 42);
//! ```
//!
//! Trapping a failure and reading the typed payload:
//!
//! ```
//! use std::panic;
//! use arca::{none, UnwrapError};
//!
//! let failure = panic::catch_unwind(|| none::<u16>().unwrap()).unwrap_err();
//! let error = failure.downcast_ref::<UnwrapError>().unwrap();
//! assert_eq!(error.message(), "failed to unwrap value");
//! ```

// Module declarations
mod error;
mod optional;
mod outcome;
pub mod testing;

// Re-exports for public API
pub use error::UnwrapError;
pub use optional::{none, some, Optional};
pub use outcome::{err, ok, Outcome};
