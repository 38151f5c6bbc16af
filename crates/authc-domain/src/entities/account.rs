//! Authenticated Account Entity

use serde::{Deserialize, Serialize};

/// Entity: Authenticated Account
///
/// The record the account service hands back on a successful credential
/// check. The access token is opaque to this client; ownership passes to
/// the caller, which decides how to use it. Nothing here is persisted.
///
/// The wire format uses camelCase field names (`accessToken`) to match the
/// account service's JSON contract.
///
/// # Example
///
/// ```
/// use authc_domain::entities::AccountModel;
///
/// let account = AccountModel::new("tok-1");
/// assert_eq!(account.access_token, "tok-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountModel {
    /// Opaque access token issued by the account service
    pub access_token: String,
}

impl AccountModel {
    /// Create a new account model
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}
