//! Reactive session context shared with every screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionContext`] is created by the `SessionProvider` component and
//! handed down through Leptos context. It owns the auth crate's
//! [`SessionManager`] inside a signal so reads are tracked and every
//! mutation re-renders dependents, plus a `loading` flag that stays `true`
//! until the one-time bootstrap has finished.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use auth::bootstrap::{Bootstrap, StoredSession, bootstrap};
use auth::events::{SessionEvent, SubscriptionId};
use auth::user::{Credentials, PublicUser, RegisterCandidate, Role, UserUpdate};
use auth::{AuthError, AuthService, SessionManager};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SessionContext {
    session: RwSignal<SessionManager>,
    loading: RwSignal<bool>,
    service: AuthService,
}

impl SessionContext {
    #[must_use]
    pub fn new(service: AuthService) -> Self {
        Self { session: RwSignal::new(SessionManager::new()), loading: RwSignal::new(true), service }
    }

    #[must_use]
    pub fn service(&self) -> &AuthService {
        &self.service
    }

    pub fn loading(&self) -> bool {
        self.loading.get()
    }

    pub fn user(&self) -> Option<PublicUser> {
        self.session.with(|s| s.user().cloned())
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.token().map(str::to_owned))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(SessionManager::is_authenticated)
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.session
            .with(|s| s.user().is_some_and(|u| u.has_permission(permission)))
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.session.with(|s| s.user().is_some_and(|u| u.has_role(role)))
    }

    pub fn session_duration_minutes(&self) -> i64 {
        self.session.with(SessionManager::session_duration_minutes)
    }

    pub fn login(&self, user: PublicUser, token: String, remember_me: bool) {
        self.session.update(|s| s.login(user, token, remember_me));
    }

    pub fn logout(&self) {
        self.session.update(SessionManager::logout);
    }

    pub fn update_user(&self, update: UserUpdate) -> bool {
        self.session
            .try_update(|s| s.update_user(update))
            .unwrap_or(false)
    }

    pub fn verify_token(&self) -> bool {
        self.session
            .try_update(SessionManager::verify_token)
            .unwrap_or(false)
    }

    pub fn restore_session(&self) -> bool {
        self.session
            .try_update_untracked(SessionManager::restore_session)
            .unwrap_or(false)
    }

    /// Register a listener without notifying readers of the session.
    pub fn subscribe<F>(&self, listener: F) -> Option<SubscriptionId>
    where
        F: Fn(&SessionEvent) + Send + Sync + 'static,
    {
        self.session.try_update_untracked(|s| s.subscribe(listener))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        let _ = self.session.try_update_untracked(|s| s.unsubscribe(id));
    }

    /// Call the auth service and start a session on success.
    ///
    /// # Errors
    ///
    /// Returns the service's [`AuthError`] unchanged; the session is untouched.
    pub async fn login_with(&self, credentials: Credentials, remember_me: bool) -> Result<PublicUser, AuthError> {
        let ok = self.service.login(credentials).await?;
        self.login(ok.user.clone(), ok.token, remember_me);
        Ok(ok.user)
    }

    /// Register through the auth service. Does not start a session.
    ///
    /// # Errors
    ///
    /// Returns the service's [`AuthError`] unchanged.
    pub async fn register(&self, candidate: RegisterCandidate) -> Result<PublicUser, AuthError> {
        self.service.register(candidate).await
    }

    /// One-time startup check of the in-memory session.
    pub async fn initialize(&self) {
        let stored = self.session.with_untracked(|s| StoredSession {
            token: s.token().map(str::to_owned),
            user: s.user().cloned(),
        });
        let had_session = stored.token.is_some() || stored.user.is_some();

        match bootstrap(&self.service, stored).await {
            Bootstrap::Restored { user, token } => {
                self.session.update(|s| {
                    let remember_me = s.remember_me();
                    s.login(user, token, remember_me);
                });
            }
            Bootstrap::Cleared if had_session => self.logout(),
            Bootstrap::Cleared => {}
        }
        self.loading.set(false);
    }
}
