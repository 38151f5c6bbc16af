//! Unit tests for the validation builder

use authc_application::ports::validation::{FieldValidation, Validation};
use authc_application::validation::ValidationBuilder;
use authc_application::validation::composite::ValidationComposite;

fn login_composite() -> ValidationComposite {
    let mut rules = ValidationBuilder::field("email").required().email().build();
    rules.extend(ValidationBuilder::field("password").required().min(5).build());
    ValidationComposite::new(rules)
}

#[test]
fn build_returns_one_rule_per_call() {
    let rules = ValidationBuilder::field("email").required().email().build();
    assert_eq!(rules.len(), 2);
    assert!(rules.iter().all(|rule| rule.field() == "email"));
}

#[test]
fn rules_fire_in_call_order() {
    let composite = login_composite();

    // required was added first, so its message wins for empty input
    assert_eq!(
        composite.validate("email", ""),
        Some("Required field".to_string())
    );
    assert_eq!(
        composite.validate("password", ""),
        Some("Required field".to_string())
    );
}

#[test]
fn login_rule_set_accepts_valid_credentials() {
    let composite = login_composite();
    assert_eq!(composite.validate("email", "a@b.com"), None);
    assert_eq!(composite.validate("password", "123456"), None);
}

#[test]
fn login_rule_set_rejects_bad_shapes() {
    let composite = login_composite();
    assert_eq!(
        composite.validate("email", "not-an-email"),
        Some("Invalid email address".to_string())
    );
    assert_eq!(
        composite.validate("password", "123"),
        Some("Must be at least 5 characters".to_string())
    );
}
