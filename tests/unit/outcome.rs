//! Contract tests for `Outcome<T, E>`: slot routing, typed error re-raise,
//! and the message shapes of the demanding extractors.

use super::common::{catch_error, catch_unwrap_error, parse_port, PanicOnDisplay, TestError};
use arca::{err, ok, Outcome};

// ============================================================================
// SLOT ROUTING
// ============================================================================

#[test]
fn factories_fix_the_slot() {
    assert!(ok::<u8, TestError>(1).is_ok());
    assert!(!ok::<u8, TestError>(1).is_err());
    assert!(err::<u8, TestError>(TestError("down")).is_err());
    assert!(!err::<u8, TestError>(TestError("down")).is_ok());
}

#[test]
fn slot_routing_survives_falsy_payloads() {
    // A truthiness-based constructor would misfile every one of these.
    assert!(ok::<i64, TestError>(0).is_ok());
    assert!(ok::<&str, TestError>("").is_ok());
    assert!(ok::<bool, TestError>(false).is_ok());
    assert!(err::<u8, String>(String::new()).is_err());
    assert!(err::<u8, i32>(0).is_err());
}

// ============================================================================
// EXTRACTION
// ============================================================================

#[test]
fn unwrap_returns_the_success_value() {
    assert_eq!(ok::<u16, TestError>(42).unwrap(), 42);
    assert_eq!(ok::<u16, TestError>(0).unwrap(), 0);
}

#[test]
fn unwrap_reraises_the_original_error_value() {
    let raised: TestError = catch_error(|| err::<u16, TestError>(TestError("disk offline")).unwrap());
    assert_eq!(raised, TestError("disk offline"));

    // The type crosses the boundary intact for std error types too.
    let raised: String = catch_error(|| err::<u16, String>(String::from("boom")).unwrap());
    assert_eq!(raised, "boom");
}

#[test]
fn unwrap_or_never_panics_and_never_reads_the_error() {
    assert_eq!(ok::<u16, PanicOnDisplay>(42).unwrap_or(0), 42);
    assert_eq!(err::<u16, PanicOnDisplay>(PanicOnDisplay).unwrap_or(0), 0);
}

// ============================================================================
// EXPECT / EXPECT_ERR MESSAGES
// ============================================================================

#[test]
fn expect_message_is_context_colon_error() {
    let error = catch_unwrap_error(|| {
        err::<u16, TestError>(TestError("connection refused")).expect("backend must be reachable")
    });
    assert_eq!(
        error.message(),
        "backend must be reachable: connection refused"
    );
}

#[test]
fn expect_err_message_is_context_colon_value() {
    let error = catch_unwrap_error(|| ok::<u16, TestError>(443).expect_err("expected error"));
    assert_eq!(error.message(), "expected error: 443");
}

#[test]
fn expect_never_formats_on_success() {
    // PanicOnDisplay fails the test if expect renders the error slot here.
    assert_eq!(ok::<u16, PanicOnDisplay>(7).expect("must parse"), 7);
}

#[test]
fn expect_err_never_formats_on_failure() {
    assert_eq!(
        err::<PanicOnDisplay, TestError>(TestError("down")).expect_err("expected error"),
        TestError("down")
    );
}

// ============================================================================
// STD INTEROP
// ============================================================================

#[test]
fn std_result_round_trip_preserves_slot_and_payload() {
    let through: Outcome<i32, TestError> = Outcome::from(Ok(0));
    assert!(through.is_ok());
    assert_eq!(Result::from(through), Ok(0));

    let through: Outcome<i32, TestError> = Outcome::from(Err(TestError("boom")));
    assert!(through.is_err());
    assert_eq!(Result::from(through), Err(TestError("boom")));
}

// ============================================================================
// FIXTURE FLOW
// ============================================================================

#[test]
fn parser_routes_by_outcome_not_by_value() {
    assert_eq!(parse_port("0").unwrap_or(8080), 0);
    assert_eq!(parse_port("65535").unwrap(), 65535);

    let failed = parse_port("not-a-port");
    assert!(failed.is_err());
    assert_eq!(failed.unwrap_or(8080), 8080);
}
