use super::*;
use crate::net::types::Role;

fn sample_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: Role::User,
        created_at: "2026-01-05T12:00:00Z".to_owned(),
    }
}

// =============================================================
// Store contract (exercised on MemoryStore; BrowserStore mirrors it)
// =============================================================

#[test]
fn load_returns_last_saved_pair() {
    let store = MemoryStore::new();
    store.save("tok-1", &sample_user());

    let mut second = sample_user();
    second.name = "Alice Updated".to_owned();
    store.save("tok-2", &second);

    let (token, user) = store.load();
    assert_eq!(token.as_deref(), Some("tok-2"));
    assert_eq!(user.unwrap().name, "Alice Updated");
}

#[test]
fn load_on_empty_store_reports_both_absent() {
    let store = MemoryStore::new();
    let (token, user) = store.load();
    assert!(token.is_none());
    assert!(user.is_none());
}

#[test]
fn clear_removes_both_fields() {
    let store = MemoryStore::new();
    store.save("tok-1", &sample_user());
    store.clear();

    let (token, user) = store.load();
    assert!(token.is_none());
    assert!(user.is_none());
}

#[test]
fn clear_is_idempotent() {
    let store = MemoryStore::new();
    store.save("tok-1", &sample_user());
    store.clear();
    store.clear();

    let (token, user) = store.load();
    assert!(token.is_none());
    assert!(user.is_none());
}

#[test]
fn default_token_accessor_matches_load() {
    let store = MemoryStore::new();
    assert!(store.token().is_none());
    store.save("tok-9", &sample_user());
    assert_eq!(store.token().as_deref(), Some("tok-9"));
}

// =============================================================
// Record serialization
// =============================================================

#[test]
fn encode_decode_user_round_trips() {
    let user = sample_user();
    let raw = encode_user(&user).unwrap();
    assert_eq!(decode_user(&raw), Some(user));
}

#[test]
fn decode_user_rejects_corrupt_record() {
    assert!(decode_user("not json").is_none());
    assert!(decode_user("{\"id\":\"u-1\"}").is_none());
}

// =============================================================
// Cookie duplicate
// =============================================================

#[test]
fn session_cookie_is_path_scoped_with_hour_expiry() {
    assert_eq!(session_cookie("abc123"), "token=abc123; path=/; max-age=3600");
}

#[test]
fn clearing_cookie_expires_immediately() {
    assert_eq!(clearing_cookie(), "token=; path=/; max-age=0");
}
