//! Unit tests for the domain error taxonomy

use authc_domain::error::Error;

#[test]
fn invalid_credentials_display() {
    let err = Error::InvalidCredentials;
    assert_eq!(err.to_string(), "invalid credentials");
    assert!(err.is_invalid_credentials());
}

#[test]
fn unexpected_constructor_builds_variant_without_source() {
    let err = Error::unexpected("something broke");
    assert_eq!(err.to_string(), "unexpected error: something broke");
    assert!(std::error::Error::source(&err).is_none());
    assert!(!err.is_invalid_credentials());
}

#[test]
fn unexpected_with_source_preserves_the_chain() {
    let cause = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
    let err = Error::unexpected_with_source("request failed", cause);
    assert_eq!(err.to_string(), "unexpected error: request failed");
    let source = std::error::Error::source(&err).unwrap();
    assert!(source.to_string().contains("timed out"));
}

#[test]
fn network_constructors_build_matching_variants() {
    let plain = Error::network("connection refused");
    assert_eq!(plain.to_string(), "network error: connection refused");

    let cause = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
    let chained = Error::network_with_source("send failed", cause);
    assert_eq!(chained.to_string(), "network error: send failed");
    let source = std::error::Error::source(&chained).unwrap();
    assert!(source.to_string().contains("reset by peer"));
}

#[test]
fn validation_error_carries_field_and_message() {
    let err = Error::validation("email", "Required field");
    assert_eq!(err.to_string(), "validation error: email: Required field");
}

#[test]
fn configuration_constructors_build_matching_variants() {
    let plain = Error::configuration("missing base URL");
    assert_eq!(plain.to_string(), "configuration error: missing base URL");

    let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let chained = Error::configuration_with_source("failed to read config", cause);
    assert_eq!(
        chained.to_string(),
        "configuration error: failed to read config"
    );
    assert!(std::error::Error::source(&chained).is_some());
}

#[test]
fn io_errors_convert_via_from() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: Error = io.into();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("denied"));
}

#[test]
fn json_errors_convert_via_from() {
    let bad = serde_json::from_str::<serde_json::Value>("not json");
    let err: Error = bad.unwrap_err().into();
    assert!(matches!(err, Error::Json { .. }));
}

#[test]
fn internal_error_display() {
    let err = Error::internal("state machine desync");
    assert_eq!(err.to_string(), "internal error: state machine desync");
}
