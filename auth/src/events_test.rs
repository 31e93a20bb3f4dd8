use std::sync::Mutex;

use super::*;
use crate::user::Role;

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
fn event_names_match_wire_names() {
    assert_eq!(SessionEvent::Login(user()).name(), "session:login");
    assert_eq!(SessionEvent::Logout.name(), "session:logout");
    assert_eq!(SessionEvent::Update(user()).name(), "session:update");
}

#[test]
fn event_user_payload() {
    assert_eq!(SessionEvent::Login(user()).user().map(|u| u.id), Some(1));
    assert!(SessionEvent::Logout.user().is_none());
}

#[test]
fn emit_reaches_listeners_in_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut bus = EventBus::new();
    for tag in ["first", "second"] {
        let seen = seen.clone();
        bus.subscribe(move |ev| seen.lock().unwrap().push(format!("{tag}:{}", ev.name())));
    }
    bus.emit(&SessionEvent::Logout);
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &["first:session:logout".to_owned(), "second:session:logout".to_owned()]
    );
}

#[test]
fn unsubscribe_stops_delivery() {
    let count = Arc::new(Mutex::new(0));
    let mut bus = EventBus::new();
    let counter = count.clone();
    let id = bus.subscribe(move |_| *counter.lock().unwrap() += 1);
    bus.emit(&SessionEvent::Logout);
    assert!(bus.unsubscribe(id));
    assert!(!bus.unsubscribe(id));
    bus.emit(&SessionEvent::Logout);
    assert_eq!(*count.lock().unwrap(), 1);
    assert!(bus.is_empty());
}

#[test]
fn subscription_ids_are_distinct() {
    let mut bus = EventBus::new();
    let a = bus.subscribe(|_| {});
    let b = bus.subscribe(|_| {});
    assert_ne!(a, b);
    assert_eq!(bus.len(), 2);
}
