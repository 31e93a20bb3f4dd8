use std::sync::Arc;

use super::*;
use crate::clock::now_ms;
use crate::config::AuthConfig;
use crate::service::NoLatency;
use crate::store::{DEMO_EMAIL, DEMO_USER_ID};

fn service() -> AuthService {
    AuthService::new(AuthConfig::default(), Arc::new(NoLatency))
}

#[tokio::test]
async fn no_token_clears() {
    assert_eq!(bootstrap(&service(), StoredSession::default()).await, Bootstrap::Cleared);
}

#[tokio::test]
async fn expired_token_clears() {
    let stored = StoredSession {
        token: Some(token::encode_with_expiry(DEMO_USER_ID, DEMO_EMAIL, now_ms() - 1)),
        user: None,
    };
    assert_eq!(bootstrap(&service(), stored).await, Bootstrap::Cleared);
}

#[tokio::test]
async fn garbage_token_clears() {
    let stored = StoredSession { token: Some("???".into()), user: None };
    assert_eq!(bootstrap(&service(), stored).await, Bootstrap::Cleared);
}

#[tokio::test]
async fn unknown_subject_clears() {
    let stored = StoredSession {
        token: Some(token::encode_with_expiry(404, "ghost@example.com", now_ms() + 60_000)),
        user: None,
    };
    assert_eq!(bootstrap(&service(), stored).await, Bootstrap::Cleared);
}

#[tokio::test]
async fn live_token_restores_verified_user() {
    let tok = token::encode_with_expiry(DEMO_USER_ID, DEMO_EMAIL, now_ms() + 60_000);
    let stored = StoredSession { token: Some(tok.clone()), user: None };
    match bootstrap(&service(), stored).await {
        Bootstrap::Restored { user, token } => {
            assert_eq!(user.id, DEMO_USER_ID);
            assert_eq!(token, tok);
        }
        Bootstrap::Cleared => panic!("expected restored session"),
    }
}
