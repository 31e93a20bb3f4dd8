//! Inline form validation for the auth screens.
//!
//! Each validator trims its inputs and returns either the request to send
//! to the auth service or the first message to render under the form.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use auth::user::{Credentials, MIN_PASSWORD_LEN, RegisterCandidate, normalize_email};

pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields";
pub const MSG_BAD_EMAIL: &str = "Please enter a valid email address";
pub const MSG_SHORT_PASSWORD: &str = "Password must be at least 6 characters";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MSG_MISSING_USERNAME: &str = "Username cannot be empty";

/// Validate the login form.
///
/// # Errors
///
/// Returns the message to render inline.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MSG_MISSING_FIELDS);
    }
    if normalize_email(email).is_none() {
        return Err(MSG_BAD_EMAIL);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Validate the registration form.
///
/// # Errors
///
/// Returns the message to render inline.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterCandidate, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(MSG_MISSING_FIELDS);
    }
    if normalize_email(email).is_none() {
        return Err(MSG_BAD_EMAIL);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(MSG_SHORT_PASSWORD);
    }
    if password != confirm {
        return Err(MSG_PASSWORD_MISMATCH);
    }
    Ok(RegisterCandidate { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// Validate the dashboard rename form.
///
/// # Errors
///
/// Returns the message to render inline.
pub fn validate_username(username: &str) -> Result<String, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err(MSG_MISSING_USERNAME);
    }
    Ok(username.to_owned())
}
