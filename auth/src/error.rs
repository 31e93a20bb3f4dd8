//! Auth service error type.
//!
//! Every variant is a "soft" failure: the UI renders the `Display` text in
//! a banner and nothing is retried.

use crate::token::DecodeError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("An account with this email already exists")]
    DuplicateEmail,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Session expired, please sign in again")]
    TokenExpired,
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid session token: {0}")]
    TokenInvalid(#[from] DecodeError),
    #[error("{0}")]
    Validation(String),
}
