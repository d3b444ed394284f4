//! Authentication errors.

use thiserror::Error;

use vitrina_core::EmailError;

use crate::store::StoreError;

/// Errors surfaced by the session manager.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email, or wrong password for the admin account.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration with an email that is already registered.
    #[error("an account with this email already exists")]
    EmailTaken,

    /// The supplied email does not parse.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// No user is logged in.
    #[error("not logged in")]
    NotLoggedIn,

    /// The registered-users list could not be persisted, so the operation
    /// did not take effect.
    #[error("could not persist the user list: {0}")]
    Persist(#[from] StoreError),
}
