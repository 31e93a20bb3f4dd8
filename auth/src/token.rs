//! Session token codec.
//!
//! DESIGN
//! ======
//! A token is standard-alphabet base64 over a small JSON object
//! `{sub, email, exp}`. It is reversible serialization, not encryption and
//! not a signature: anyone holding the format can mint one. Expiry is an
//! absolute instant in milliseconds since the Unix epoch.

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::clock::now_ms;

/// Decoded token payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the identity id the token was issued to.
    pub sub: u64,
    /// Email the token was issued for.
    pub email: String,
    /// Absolute expiry in milliseconds since the Unix epoch.
    pub exp: i64,
}

impl TokenClaims {
    /// Whether the claims are expired at `now_ms`.
    #[must_use]
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        self.exp <= now_ms
    }

    /// Milliseconds left before expiry at `now_ms`, never negative.
    #[must_use]
    pub fn remaining_ms_at(&self, now_ms: i64) -> i64 {
        self.exp.saturating_sub(now_ms).max(0)
    }
}

/// Error returned by [`decode`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("token is not valid base64: {0}")]
    Base64(String),
    #[error("token payload is not utf-8")]
    Utf8,
    #[error("token payload is not well-formed: {0}")]
    Json(String),
}

/// Encode a token for `sub` that expires `ttl` from now.
#[must_use]
pub fn encode(sub: u64, email: &str, ttl: Duration) -> String {
    let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
    encode_with_expiry(sub, email, now_ms().saturating_add(ttl_ms))
}

/// Encode a token with an explicit absolute expiry.
#[must_use]
pub fn encode_with_expiry(sub: u64, email: &str, exp: i64) -> String {
    encode_claims(&TokenClaims { sub, email: email.to_owned(), exp })
}

/// Encode already-built claims.
#[must_use]
pub fn encode_claims(claims: &TokenClaims) -> String {
    // Serializing a struct of plain scalars cannot fail.
    let json = serde_json::to_string(claims).unwrap_or_default();
    STANDARD.encode(json)
}

/// Decode a token back into its claims.
///
/// # Errors
///
/// Returns [`DecodeError`] when the token is not base64, the payload is not
/// UTF-8, or the payload is not a well-formed claims object.
pub fn decode(token: &str) -> Result<TokenClaims, DecodeError> {
    let bytes = STANDARD
        .decode(token.trim())
        .map_err(|e| DecodeError::Base64(e.to_string()))?;
    let json = String::from_utf8(bytes).map_err(|_| DecodeError::Utf8)?;
    serde_json::from_str(&json).map_err(|e| DecodeError::Json(e.to_string()))
}

/// Whether `token` is expired right now. Undecodable tokens count as expired.
#[must_use]
pub fn is_expired(token: &str) -> bool {
    decode(token).map_or(true, |claims| claims.is_expired_at(now_ms()))
}
