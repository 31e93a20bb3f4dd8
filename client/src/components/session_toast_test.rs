use auth::user::{PublicUser, Role};

use super::*;

fn user() -> PublicUser {
    PublicUser {
        id: 1,
        username: "demo".into(),
        email: "demo@example.com".into(),
        role: Role::User,
        permissions: vec![],
        created_at: 0,
    }
}

#[test]
fn login_toast_greets_user() {
    assert_eq!(toast_message(&SessionEvent::Login(user())), "Welcome, demo!");
}

#[test]
fn logout_toast() {
    assert_eq!(toast_message(&SessionEvent::Logout), "You have been signed out.");
}

#[test]
fn update_toast_names_user() {
    assert_eq!(toast_message(&SessionEvent::Update(user())), "Profile updated for demo.");
}
