use super::*;

#[test]
fn hash_password_is_stable_hex() {
    let a = hash_password("demo123");
    assert_eq!(a, hash_password("demo123"));
    assert_ne!(a, hash_password("demo124"));
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn seeded_store_holds_demo_identity() {
    let store = UserStore::seeded();
    assert_eq!(store.len(), 1);
    let demo = store.find_by_email(DEMO_EMAIL).unwrap();
    assert_eq!(demo.id, DEMO_USER_ID);
    assert_eq!(demo.username, DEMO_USERNAME);
    assert_ne!(demo.password_hash, DEMO_PASSWORD);
}

#[test]
fn find_by_credentials_requires_both_fields() {
    let store = UserStore::seeded();
    assert!(store.find_by_credentials(DEMO_EMAIL, DEMO_PASSWORD).is_some());
    assert!(store.find_by_credentials(DEMO_EMAIL, "wrong").is_none());
    assert!(store.find_by_credentials("other@example.com", DEMO_PASSWORD).is_none());
}

#[test]
fn insert_assigns_next_id() {
    let mut store = UserStore::seeded();
    let id = store.insert(" alice ", "alice@example.com", "secret1").id;
    assert_eq!(id, DEMO_USER_ID + 1);
    let alice = store.find_by_id(id).unwrap();
    assert_eq!(alice.username, "alice");
    assert_eq!(alice.permissions, vec!["read".to_owned(), "write".to_owned()]);
    assert!(store.find_by_credentials("alice@example.com", "secret1").is_some());
}

#[test]
fn empty_store_starts_at_one() {
    let mut store = UserStore::new();
    assert!(store.is_empty());
    assert_eq!(store.insert("a", "a@b.com", "secret1").id, 1);
}

#[test]
fn find_by_id_missing() {
    assert!(UserStore::seeded().find_by_id(999).is_none());
}
