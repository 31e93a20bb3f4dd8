//! Identity records and the request/response shapes around them.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Identity`] never leaves the store: it carries the password digest.
//! Everything handed to the UI or the session holder is a [`PublicUser`].

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Coarse role attached to every identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

/// A registered identity as kept by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub id: u64,
    pub username: String,
    /// Normalized (trimmed, lowercase) email. Unique across the store.
    pub email: String,
    /// Hex SHA-256 of the password.
    pub password_hash: String,
    pub role: Role,
    pub permissions: Vec<String>,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl Identity {
    /// Strip the password digest.
    #[must_use]
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
            permissions: self.permissions.clone(),
            created_at: self.created_at,
        }
    }
}

/// An identity without its password, as exposed to the session and UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub created_at: i64,
}

impl PublicUser {
    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    /// Merge a partial update into this user.
    pub fn apply(&mut self, update: UserUpdate) {
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(permissions) = update.permissions {
            self.permissions = permissions;
        }
    }
}

/// Partial update applied to the session's user. `None` fields are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub permissions: Option<Vec<String>>,
}

impl UserUpdate {
    #[must_use]
    pub fn username(username: impl Into<String>) -> Self {
        Self { username: Some(username.into()), ..Self::default() }
    }
}

/// Login request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterCandidate {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful login result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginSuccess {
    pub token: String,
    pub user: PublicUser,
}

/// Trim and lowercase an email, returning `None` unless it has exactly one
/// `@` with a non-empty local part and domain.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') || normalized.contains(char::is_whitespace) {
        return None;
    }
    Some(normalized)
}

/// Validate a registration candidate, returning the normalized email.
///
/// # Errors
///
/// Returns a user-facing message for the first failing field.
pub fn validate_candidate(candidate: &RegisterCandidate) -> Result<String, &'static str> {
    if candidate.username.trim().is_empty() {
        return Err("Username is required");
    }
    let email = normalize_email(&candidate.email).ok_or("Please enter a valid email address")?;
    if candidate.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(email)
}
