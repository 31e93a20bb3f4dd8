//! Mock auth API over the in-memory user store.
//!
//! ARCHITECTURE
//! ============
//! `register`, `login` and `verify` behave like calls to a remote backend:
//! each first suspends for the configured latency, then answers from the
//! [`UserStore`]. The delay is injected through [`Latency`] so the browser,
//! the host, and tests can each supply their own timer.
//!
//! TRADE-OFFS
//! ==========
//! The store sits behind `Arc<Mutex<_>>` so the service is cheap to clone
//! into spawned UI tasks. The lock is only taken after the simulated delay
//! and is never held across an await.

#[cfg(test)]
#[path = "service_test.rs"]
mod tests;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::store::UserStore;
use crate::token;
use crate::user::{Credentials, LoginSuccess, PublicUser, RegisterCandidate, validate_candidate};
use crate::{clock, user};

/// Simulated network delay. Enables zero-delay tests.
#[async_trait::async_trait(?Send)]
pub trait Latency: Send + Sync {
    async fn pause(&self, delay: Duration);
}

/// Latency that returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait::async_trait(?Send)]
impl Latency for NoLatency {
    async fn pause(&self, _delay: Duration) {}
}

/// `{success, message}` result shape consumed by the UI banners.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
}

impl AuthResponse {
    /// Render a service result into the soft-error shape.
    pub fn from_result<T>(result: &Result<T, AuthError>, success_message: &str) -> Self {
        match result {
            Ok(_) => Self { success: true, message: success_message.to_owned() },
            Err(e) => Self { success: false, message: e.to_string() },
        }
    }
}

#[derive(Clone)]
pub struct AuthService {
    store: Arc<Mutex<UserStore>>,
    latency: Arc<dyn Latency>,
    config: AuthConfig,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("users", &self.users().len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    /// Service over a seeded store.
    #[must_use]
    pub fn new(config: AuthConfig, latency: Arc<dyn Latency>) -> Self {
        Self::with_store(UserStore::seeded(), config, latency)
    }

    #[must_use]
    pub fn with_store(store: UserStore, config: AuthConfig, latency: Arc<dyn Latency>) -> Self {
        Self { store: Arc::new(Mutex::new(store)), latency, config }
    }

    fn users(&self) -> MutexGuard<'_, UserStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a new identity.
    ///
    /// # Errors
    ///
    /// [`AuthError::Validation`] for a malformed candidate,
    /// [`AuthError::DuplicateEmail`] when the email is taken.
    pub async fn register(&self, candidate: RegisterCandidate) -> Result<PublicUser, AuthError> {
        self.latency.pause(self.config.latency).await;

        let email = validate_candidate(&candidate).map_err(|msg| AuthError::Validation(msg.to_owned()))?;
        let mut users = self.users();
        if users.find_by_email(&email).is_some() {
            tracing::warn!(%email, "registration rejected: duplicate email");
            return Err(AuthError::DuplicateEmail);
        }
        let created = users.insert(&candidate.username, &email, &candidate.password).to_public();
        tracing::info!(user_id = created.id, %email, "user registered");
        Ok(created)
    }

    /// Exchange credentials for a fresh token.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] unless email and password both match.
    pub async fn login(&self, credentials: Credentials) -> Result<LoginSuccess, AuthError> {
        self.latency.pause(self.config.latency).await;

        let email = user::normalize_email(&credentials.email).ok_or(AuthError::InvalidCredentials)?;
        let users = self.users();
        let Some(identity) = users.find_by_credentials(&email, &credentials.password) else {
            tracing::warn!(%email, "login rejected: invalid credentials");
            return Err(AuthError::InvalidCredentials);
        };
        let token = token::encode(identity.id, &identity.email, self.config.token_ttl);
        tracing::info!(user_id = identity.id, "login succeeded");
        Ok(LoginSuccess { token, user: identity.to_public() })
    }

    /// Resolve a token back to its user.
    ///
    /// # Errors
    ///
    /// [`AuthError::TokenInvalid`] when the token does not decode,
    /// [`AuthError::TokenExpired`] once its expiry has passed, and
    /// [`AuthError::UserNotFound`] when its subject no longer resolves.
    pub async fn verify(&self, token: &str) -> Result<PublicUser, AuthError> {
        self.latency.pause(self.config.latency).await;

        let claims = token::decode(token)?;
        if claims.is_expired_at(clock::now_ms()) {
            tracing::warn!(user_id = claims.sub, exp = claims.exp, "token expired");
            return Err(AuthError::TokenExpired);
        }
        self.users()
            .find_by_id(claims.sub)
            .map(user::Identity::to_public)
            .ok_or(AuthError::UserNotFound)
    }
}
