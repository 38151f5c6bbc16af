//! Domain Entities
//!
//! Records with identity that the system produces. The only entity this
//! client knows about is the authenticated account handed back by the
//! account service.

/// Authenticated account entity
pub mod account;

pub use account::AccountModel;
