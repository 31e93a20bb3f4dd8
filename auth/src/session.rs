//! Session state holder: the one `{user, token}` record of the running client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the client's session provider and shared through context. Every
//! mutation recomputes `is_authenticated` from the two fields and emits a
//! [`SessionEvent`] to subscribed listeners (toasts, navigation).

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use crate::clock::now_ms;
use crate::events::{EventBus, SessionEvent, SubscriptionId};
use crate::token;
use crate::user::{PublicUser, UserUpdate};

const MS_PER_MINUTE: i64 = 60_000;

#[derive(Clone, Debug, Default)]
pub struct SessionManager {
    user: Option<PublicUser>,
    token: Option<String>,
    is_authenticated: bool,
    remember_me: bool,
    events: EventBus,
}

impl SessionManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn user(&self) -> Option<&PublicUser> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    #[must_use]
    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionEvent) + Send + Sync + 'static,
    {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    fn sync_authenticated(&mut self) {
        self.is_authenticated = self.user.is_some() && self.token.is_some();
    }

    pub fn login(&mut self, user: PublicUser, token: String, remember_me: bool) {
        tracing::info!(user_id = user.id, remember_me, "session started");
        self.user = Some(user.clone());
        self.token = Some(token);
        self.remember_me = remember_me;
        self.sync_authenticated();
        self.events.emit(&SessionEvent::Login(user));
    }

    pub fn logout(&mut self) {
        if let Some(user) = &self.user {
            tracing::info!(user_id = user.id, "session ended");
        }
        self.user = None;
        self.token = None;
        self.remember_me = false;
        self.sync_authenticated();
        self.events.emit(&SessionEvent::Logout);
    }

    /// Merge `update` into the current user. Returns `false` with no user.
    pub fn update_user(&mut self, update: UserUpdate) -> bool {
        let Some(user) = self.user.as_mut() else {
            return false;
        };
        user.apply(update);
        let snapshot = user.clone();
        self.sync_authenticated();
        self.events.emit(&SessionEvent::Update(snapshot));
        true
    }

    /// Whether the held token is present and unexpired. A held token that is
    /// expired or undecodable ends the session; with no token nothing changes.
    pub fn verify_token(&mut self) -> bool {
        self.verify_token_at(now_ms())
    }

    pub fn verify_token_at(&mut self, now_ms: i64) -> bool {
        let Some(held) = self.token.as_deref() else {
            return false;
        };
        let valid = token::decode(held).is_ok_and(|claims| !claims.is_expired_at(now_ms));
        if !valid {
            tracing::warn!("session token invalid or expired");
            self.logout();
        }
        valid
    }

    /// Whole minutes until the token expires; zero without a live token.
    #[must_use]
    pub fn session_duration_minutes(&self) -> i64 {
        self.session_duration_minutes_at(now_ms())
    }

    #[must_use]
    pub fn session_duration_minutes_at(&self, now_ms: i64) -> i64 {
        self.token
            .as_deref()
            .and_then(|t| token::decode(t).ok())
            .map_or(0, |claims| claims.remaining_ms_at(now_ms) / MS_PER_MINUTE)
    }

    /// Reload a persisted session. Nothing is persisted, so always `false`.
    #[allow(clippy::unused_self)]
    pub fn restore_session(&mut self) -> bool {
        false
    }
}
