//! In-memory mock user store.
//!
//! DESIGN
//! ======
//! A plain ordered `Vec` of identities, seeded with one demo account. Ids
//! are assigned as `max id + 1`; identities are never removed. Passwords
//! are kept only as unsalted SHA-256 digests, which keeps plaintext out of
//! memory dumps but is still demo-grade.

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

use sha2::{Digest, Sha256};

use crate::clock::now_ms;
use crate::user::{Identity, Role};

pub const DEMO_USER_ID: u64 = 1;
pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "demo123";

/// Permissions granted to freshly registered identities.
pub const DEFAULT_PERMISSIONS: &[&str] = &["read", "write"];

#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    let bytes = hasher.finalize();
    bytes.iter().map(|b| format!("{b:02x}")).collect::<String>()
}

#[derive(Clone, Debug, Default)]
pub struct UserStore {
    users: Vec<Identity>,
}

impl UserStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the demo identity.
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.users.push(Identity {
            id: DEMO_USER_ID,
            username: DEMO_USERNAME.to_owned(),
            email: DEMO_EMAIL.to_owned(),
            password_hash: hash_password(DEMO_PASSWORD),
            role: Role::User,
            permissions: default_permissions(),
            created_at: now_ms(),
        });
        store
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Look up by normalized email.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&Identity> {
        self.users.iter().find(|u| u.email == email)
    }

    #[must_use]
    pub fn find_by_id(&self, id: u64) -> Option<&Identity> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Identity whose email and password both match.
    #[must_use]
    pub fn find_by_credentials(&self, email: &str, password: &str) -> Option<&Identity> {
        let digest = hash_password(password);
        self.users
            .iter()
            .find(|u| u.email == email && u.password_hash == digest)
    }

    /// Insert a new identity. The caller has already checked email uniqueness.
    pub fn insert(&mut self, username: &str, email: &str, password: &str) -> &Identity {
        let id = self.next_id();
        self.users.push(Identity {
            id,
            username: username.trim().to_owned(),
            email: email.to_owned(),
            password_hash: hash_password(password),
            role: Role::User,
            permissions: default_permissions(),
            created_at: now_ms(),
        });
        let idx = self.users.len() - 1;
        &self.users[idx]
    }

    fn next_id(&self) -> u64 {
        self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1
    }
}

fn default_permissions() -> Vec<String> {
    DEFAULT_PERMISSIONS.iter().map(|p| (*p).to_owned()).collect()
}
