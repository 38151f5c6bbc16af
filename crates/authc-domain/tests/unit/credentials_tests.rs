//! Unit tests for the credentials value object

use authc_domain::value_objects::AuthenticationParams;

#[test]
fn params_constructor_sets_both_fields() {
    let params = AuthenticationParams::new("a@b.com", "123456");
    assert_eq!(params.email, "a@b.com");
    assert_eq!(params.password, "123456");
}

#[test]
fn params_serialize_as_login_request_body() {
    let params = AuthenticationParams::new("a@b.com", "123456");
    let json = serde_json::to_value(&params).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "email": "a@b.com", "password": "123456" })
    );
}

#[test]
fn params_debug_redacts_the_password() {
    let params = AuthenticationParams::new("a@b.com", "s3cret-password");
    let rendered = format!("{params:?}");
    assert!(rendered.contains("a@b.com"));
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("s3cret-password"));
}

#[test]
fn params_equality_is_by_value() {
    let a = AuthenticationParams::new("a@b.com", "123456");
    let b = AuthenticationParams::new("a@b.com", "123456");
    let c = AuthenticationParams::new("a@b.com", "654321");
    assert_eq!(a, b);
    assert_ne!(a, c);
}
