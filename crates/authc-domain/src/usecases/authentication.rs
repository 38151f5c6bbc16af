//! Authentication Use-Case Port
//!
//! Defines the contract for checking credentials against the account
//! service. Implementations live in the application layer; test doubles
//! conform to the same trait.

use crate::entities::AccountModel;
use crate::error::Result;
use crate::value_objects::AuthenticationParams;
use async_trait::async_trait;

/// Authentication use-case interface
///
/// A single fire-and-forget credential check: exactly one of
/// `Ok(AccountModel)` or `Err` results from each call, never a partial
/// outcome. Implementations hold no per-call state; concurrent calls are
/// independent and are not deduplicated here.
#[async_trait]
pub trait Authentication: Send + Sync {
    /// Submit credentials and resolve to the authenticated account
    ///
    /// Fails with [`Error::InvalidCredentials`](crate::Error::InvalidCredentials)
    /// when the server rejects the credentials and with
    /// [`Error::Unexpected`](crate::Error::Unexpected) for every other
    /// non-success outcome.
    async fn authenticate(&self, params: AuthenticationParams) -> Result<AccountModel>;
}
