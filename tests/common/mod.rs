//! Shared test utilities and fixtures.

#![allow(dead_code)]

use arca::{err, none, ok, some, Optional, Outcome};

// Re-export canonical panic-capture helpers from arca::testing
pub use arca::testing::{catch_error, catch_payload, catch_unwrap_error, PanicOnDisplay, TestError};

// ============================================================================
// LOOKUP FIXTURES
// ============================================================================

/// A settings table where zero is a legitimate stored value.
///
/// `http.port` is deliberately 0 (OS-assigned port): any code that treats
/// the payload's "falsiness" as absence gets caught by these fixtures.
pub const SETTINGS: &[(&str, u16)] = &[
    ("http.port", 0),
    ("retry.max", 4),
    ("cache.ttl", 300),
];

/// Look up a setting, reporting absence explicitly.
pub fn setting(key: &str) -> Optional<u16> {
    for (name, value) in SETTINGS {
        if *name == key {
            return some(*value);
        }
    }
    none()
}

/// Parse a decimal port, failing loudly on bad input.
pub fn parse_port(raw: &str) -> Outcome<u16, String> {
    match raw.parse::<u16>() {
        Ok(port) => ok(port),
        Err(cause) => err(format!("invalid port {:?}: {}", raw, cause)),
    }
}
