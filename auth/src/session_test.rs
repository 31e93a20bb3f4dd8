use std::sync::{Arc, Mutex};

use super::*;
use crate::user::Role;

fn user() -> PublicUser {
    PublicUser {
        id: 1,
        username: "demo".into(),
        email: "demo@example.com".into(),
        role: Role::User,
        permissions: vec!["read".into()],
        created_at: 0,
    }
}

fn live_token() -> String {
    token::encode_with_expiry(1, "demo@example.com", now_ms() + 3_600_000)
}

fn assert_consistent(session: &SessionManager) {
    assert_eq!(
        session.is_authenticated(),
        session.user().is_some() && session.token().is_some()
    );
}

fn record_events(session: &mut SessionManager) -> Arc<Mutex<Vec<&'static str>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    session.subscribe(move |ev| sink.lock().unwrap().push(ev.name()));
    seen
}

// =============================================================================
// login / logout
// =============================================================================

#[test]
fn new_session_is_empty() {
    let session = SessionManager::new();
    assert!(session.user().is_none());
    assert!(session.token().is_none());
    assert!(!session.is_authenticated());
    assert_consistent(&session);
}

#[test]
fn login_populates_and_emits() {
    let mut session = SessionManager::new();
    let seen = record_events(&mut session);
    session.login(user(), live_token(), true);
    assert!(session.is_authenticated());
    assert!(session.remember_me());
    assert_eq!(session.user().map(|u| u.id), Some(1));
    assert_eq!(seen.lock().unwrap().as_slice(), &["session:login"]);
    assert_consistent(&session);
}

#[test]
fn logout_clears_and_emits() {
    let mut session = SessionManager::new();
    session.login(user(), live_token(), true);
    let seen = record_events(&mut session);
    session.logout();
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
    assert!(session.token().is_none());
    assert!(!session.remember_me());
    assert_eq!(seen.lock().unwrap().as_slice(), &["session:logout"]);
    assert_consistent(&session);
}

#[test]
fn login_event_carries_user() {
    let mut session = SessionManager::new();
    let got = Arc::new(Mutex::new(None));
    let sink = got.clone();
    session.subscribe(move |ev| *sink.lock().unwrap() = ev.user().cloned());
    session.login(user(), live_token(), false);
    assert_eq!(got.lock().unwrap().as_ref().map(|u| u.username.clone()), Some("demo".to_owned()));
}

#[test]
fn unsubscribed_listener_is_silent() {
    let mut session = SessionManager::new();
    let seen = Arc::new(Mutex::new(0));
    let sink = seen.clone();
    let id = session.subscribe(move |_| *sink.lock().unwrap() += 1);
    assert!(session.unsubscribe(id));
    session.login(user(), live_token(), false);
    assert_eq!(*seen.lock().unwrap(), 0);
}

// =============================================================================
// update_user
// =============================================================================

#[test]
fn update_user_merges_and_emits() {
    let mut session = SessionManager::new();
    session.login(user(), live_token(), false);
    let seen = record_events(&mut session);
    assert!(session.update_user(UserUpdate::username("renamed")));
    assert_eq!(session.user().map(|u| u.username.as_str()), Some("renamed"));
    assert_eq!(session.user().map(|u| u.email.as_str()), Some("demo@example.com"));
    assert_eq!(seen.lock().unwrap().as_slice(), &["session:update"]);
    assert_consistent(&session);
}

#[test]
fn update_user_without_user_is_noop() {
    let mut session = SessionManager::new();
    let seen = record_events(&mut session);
    assert!(!session.update_user(UserUpdate::username("ghost")));
    assert!(session.user().is_none());
    assert!(seen.lock().unwrap().is_empty());
    assert_consistent(&session);
}

// =============================================================================
// verify_token
// =============================================================================

#[test]
fn verify_token_live_keeps_session() {
    let mut session = SessionManager::new();
    session.login(user(), live_token(), false);
    assert!(session.verify_token());
    assert!(session.is_authenticated());
}

#[test]
fn verify_token_expired_logs_out() {
    let mut session = SessionManager::new();
    let expired = token::encode_with_expiry(1, "demo@example.com", now_ms() - 1);
    session.login(user(), expired, false);
    let seen = record_events(&mut session);
    assert!(!session.verify_token());
    assert!(!session.is_authenticated());
    assert_eq!(seen.lock().unwrap().as_slice(), &["session:logout"]);
    assert_consistent(&session);
}

#[test]
fn verify_token_at_expiry_instant_logs_out() {
    let mut session = SessionManager::new();
    session.login(user(), token::encode_with_expiry(1, "d@e.f", 5_000), false);
    assert!(session.verify_token_at(4_999));
    assert!(!session.verify_token_at(5_000));
}

#[test]
fn verify_token_garbage_logs_out() {
    let mut session = SessionManager::new();
    session.login(user(), "garbage".into(), false);
    assert!(!session.verify_token());
    assert!(session.token().is_none());
}

#[test]
fn verify_token_without_token_is_false() {
    let mut session = SessionManager::new();
    let seen = record_events(&mut session);
    assert!(!session.verify_token());
    assert!(seen.lock().unwrap().is_empty());
    assert_consistent(&session);
}

// =============================================================================
// duration / restore
// =============================================================================

#[test]
fn duration_two_minutes_exactly() {
    let mut session = SessionManager::new();
    let exp = 10_000_000;
    session.login(user(), token::encode_with_expiry(1, "d@e.f", exp), false);
    assert_eq!(session.session_duration_minutes_at(exp - 120_000), 2);
}

#[test]
fn duration_floors_partial_minutes() {
    let mut session = SessionManager::new();
    let exp = 10_000_000;
    session.login(user(), token::encode_with_expiry(1, "d@e.f", exp), false);
    assert_eq!(session.session_duration_minutes_at(exp - 119_999), 1);
    assert_eq!(session.session_duration_minutes_at(exp + 1), 0);
}

#[test]
fn duration_of_forged_far_past_token_is_zero() {
    let mut session = SessionManager::new();
    session.login(user(), token::encode_with_expiry(1, "d@e.f", i64::MIN), false);
    assert_eq!(session.session_duration_minutes(), 0);
}

#[test]
fn duration_without_token_is_zero() {
    assert_eq!(SessionManager::new().session_duration_minutes(), 0);
}

#[test]
fn duration_of_day_token() {
    let mut session = SessionManager::new();
    session.login(user(), token::encode(1, "d@e.f", std::time::Duration::from_secs(86_400)), false);
    let minutes = session.session_duration_minutes();
    assert!((1439..=1440).contains(&minutes));
}

#[test]
fn restore_session_is_always_false() {
    let mut session = SessionManager::new();
    assert!(!session.restore_session());
    session.login(user(), live_token(), true);
    assert!(!session.restore_session());
    assert!(session.is_authenticated());
}
