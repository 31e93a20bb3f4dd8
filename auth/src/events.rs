//! Typed publish/subscribe channel for session changes.
//!
//! DESIGN
//! ======
//! Listeners are owned by the session they observe rather than registered
//! on an ambient global dispatcher. Delivery is synchronous and in
//! subscription order.

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use std::sync::Arc;

use crate::user::PublicUser;

/// A change to the session, carrying the user where one applies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Login(PublicUser),
    Logout,
    Update(PublicUser),
}

impl SessionEvent {
    /// Wire name of the event (`session:login`, ...).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login(_) => "session:login",
            Self::Logout => "session:logout",
            Self::Update(_) => "session:update",
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<&PublicUser> {
        match self {
            Self::Login(user) | Self::Update(user) => Some(user),
            Self::Logout => None,
        }
    }
}

pub type Listener = Arc<dyn Fn(&SessionEvent) + Send + Sync>;

/// Handle returned by [`EventBus::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Clone, Default)]
pub struct EventBus {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn emit(&self, event: &SessionEvent) {
        tracing::debug!(event = event.name(), listeners = self.listeners.len(), "session event");
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }
}
