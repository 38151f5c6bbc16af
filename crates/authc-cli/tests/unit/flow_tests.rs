//! Unit tests for the login submission flow

use async_trait::async_trait;
use authc_application::ports::validation::Validation;
use authc_cli::{GENERIC_FAILURE_MESSAGE, INVALID_CREDENTIALS_MESSAGE, LoginFlow, LoginOutcome};
use authc_domain::entities::AccountModel;
use authc_domain::error::{Error, Result};
use authc_domain::usecases::Authentication;
use authc_domain::value_objects::AuthenticationParams;
use std::sync::{Arc, Mutex};

/// Authentication test double with a canned result
struct AuthenticationSpy {
    calls: Mutex<Vec<AuthenticationParams>>,
    reply: fn() -> Result<AccountModel>,
}

impl AuthenticationSpy {
    fn replying(reply: fn() -> Result<AccountModel>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply,
        })
    }

    fn calls(&self) -> Vec<AuthenticationParams> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Authentication for AuthenticationSpy {
    async fn authenticate(&self, params: AuthenticationParams) -> Result<AccountModel> {
        self.calls.lock().unwrap().push(params);
        (self.reply)()
    }
}

/// Validation double: `None` for everything, or a message for empty values
struct ValidationStub {
    reject_empty: bool,
}

impl ValidationStub {
    fn accepting() -> Arc<Self> {
        Arc::new(Self {
            reject_empty: false,
        })
    }

    fn requiring_values() -> Arc<Self> {
        Arc::new(Self { reject_empty: true })
    }
}

impl Validation for ValidationStub {
    fn validate(&self, _field: &str, value: &str) -> Option<String> {
        if self.reject_empty && value.is_empty() {
            Some("Required field".to_string())
        } else {
            None
        }
    }
}

fn filled_form(flow: &LoginFlow) -> authc_cli::LoginForm {
    let mut form = flow.form();
    form.set_email("a@b.com");
    form.set_password("123456");
    form
}

#[tokio::test]
async fn an_invalid_form_never_reaches_the_use_case() {
    let spy = AuthenticationSpy::replying(|| Ok(AccountModel::new("tok-1")));
    let flow = LoginFlow::new(spy.clone(), ValidationStub::requiring_values());

    let form = flow.form();
    let outcome = flow.submit(&form).await;

    assert_eq!(
        outcome,
        LoginOutcome::Invalid {
            email_error: Some("Required field".to_string()),
            password_error: Some("Required field".to_string()),
        }
    );
    assert!(spy.calls().is_empty());
}

#[tokio::test]
async fn a_valid_form_authenticates_once_with_its_values() {
    let spy = AuthenticationSpy::replying(|| Ok(AccountModel::new("tok-1")));
    let flow = LoginFlow::new(spy.clone(), ValidationStub::accepting());

    let form = filled_form(&flow);
    flow.submit(&form).await;

    let calls = spy.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], AuthenticationParams::new("a@b.com", "123456"));
}

#[tokio::test]
async fn success_maps_to_authenticated_with_the_account() {
    let spy = AuthenticationSpy::replying(|| Ok(AccountModel::new("tok-1")));
    let flow = LoginFlow::new(spy, ValidationStub::accepting());

    let outcome = flow.submit(&filled_form(&flow)).await;
    assert_eq!(
        outcome,
        LoginOutcome::Authenticated(AccountModel::new("tok-1"))
    );
}

#[tokio::test]
async fn rejected_credentials_map_to_the_field_specific_message() {
    let spy = AuthenticationSpy::replying(|| Err(Error::InvalidCredentials));
    let flow = LoginFlow::new(spy, ValidationStub::accepting());

    let outcome = flow.submit(&filled_form(&flow)).await;
    assert_eq!(
        outcome,
        LoginOutcome::CredentialsRejected(INVALID_CREDENTIALS_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn any_other_error_maps_to_the_generic_message() {
    let spy = AuthenticationSpy::replying(|| Err(Error::unexpected("boom")));
    let flow = LoginFlow::new(spy, ValidationStub::accepting());

    let outcome = flow.submit(&filled_form(&flow)).await;
    assert_eq!(
        outcome,
        LoginOutcome::Failed(GENERIC_FAILURE_MESSAGE.to_string())
    );
}
