//! Unit tests for the authentication port contract

use async_trait::async_trait;
use authc_domain::entities::AccountModel;
use authc_domain::error::{Error, Result};
use authc_domain::usecases::Authentication;
use authc_domain::value_objects::AuthenticationParams;
use std::sync::Arc;

/// Canned implementation used to exercise the port through trait objects
struct StaticAuthentication {
    token: Option<String>,
}

#[async_trait]
impl Authentication for StaticAuthentication {
    async fn authenticate(&self, _params: AuthenticationParams) -> Result<AccountModel> {
        match &self.token {
            Some(token) => Ok(AccountModel::new(token.clone())),
            None => Err(Error::InvalidCredentials),
        }
    }
}

#[tokio::test]
async fn port_dispatches_through_trait_objects() {
    let auth: Arc<dyn Authentication> = Arc::new(StaticAuthentication {
        token: Some("tok-1".into()),
    });

    let account = auth
        .authenticate(AuthenticationParams::new("a@b.com", "123456"))
        .await
        .unwrap();
    assert_eq!(account.access_token, "tok-1");
}

#[tokio::test]
async fn port_propagates_domain_errors() {
    let auth: Arc<dyn Authentication> = Arc::new(StaticAuthentication { token: None });

    let err = auth
        .authenticate(AuthenticationParams::new("a@b.com", "wrong"))
        .await
        .unwrap_err();
    assert!(err.is_invalid_credentials());
}
