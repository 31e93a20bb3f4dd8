//! One-time session initialization run by the provider on mount.
//!
//! Takes whatever token/user the client holds in memory, rejects it early
//! when it is locally expired, and otherwise asks the auth service to
//! verify it. Every failure collapses to [`Bootstrap::Cleared`]: a bad
//! stored session means "not authenticated", never an error.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod tests;

use crate::service::AuthService;
use crate::token;
use crate::user::PublicUser;

/// In-memory session material available at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub user: Option<PublicUser>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Bootstrap {
    Restored { user: PublicUser, token: String },
    Cleared,
}

pub async fn bootstrap(service: &AuthService, stored: StoredSession) -> Bootstrap {
    let Some(token) = stored.token else {
        return Bootstrap::Cleared;
    };
    if token::is_expired(&token) {
        tracing::info!("stored session expired");
        return Bootstrap::Cleared;
    }
    match service.verify(&token).await {
        Ok(user) => {
            if stored.user.as_ref().is_some_and(|u| u.id != user.id) {
                tracing::warn!(stored = ?stored.user.as_ref().map(|u| u.id), verified = user.id, "stored user mismatch");
            }
            Bootstrap::Restored { user, token }
        }
        Err(e) => {
            tracing::warn!(error = %e, "stored session rejected");
            Bootstrap::Cleared
        }
    }
}
