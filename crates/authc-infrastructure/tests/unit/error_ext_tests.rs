//! Error extension tests

use authc_domain::error::Error;
use authc_infrastructure::error_ext::ErrorContext;
use std::io;

fn io_failure() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
}

#[test]
fn config_context_wraps_the_error_with_the_message() {
    let err = io_failure().config_context("Failed to read config").unwrap_err();

    match err {
        Error::Configuration { message, source } => {
            assert!(message.starts_with("Failed to read config"));
            assert!(message.contains("denied"));
            assert!(source.is_some());
        }
        other => panic!("expected Configuration, got {other:?}"),
    }
}

#[test]
fn with_config_context_evaluates_the_closure_lazily() {
    let ok: std::result::Result<u32, io::Error> = Ok(7);
    let value = ok
        .with_config_context(|| panic!("must not run on the Ok path"))
        .unwrap();
    assert_eq!(value, 7);
}

#[test]
fn with_config_context_formats_on_the_error_path() {
    let path = "/etc/authc/authc.toml";
    let err = io_failure()
        .with_config_context(|| format!("Failed to write {path}"))
        .unwrap_err();

    match err {
        Error::Configuration { message, .. } => {
            assert!(message.contains(path));
        }
        other => panic!("expected Configuration, got {other:?}"),
    }
}

#[test]
fn source_chain_is_preserved() {
    let err = io_failure().config_context("context").unwrap_err();
    let source = std::error::Error::source(&err).expect("source should be kept");
    assert!(source.to_string().contains("denied"));
}
