//! Persisted session store: the durable token + profile record and the
//! short-lived cookie duplicate consumed by the edge route guard.
//!
//! DESIGN
//! ======
//! The durable store (browser `localStorage`) is authoritative. The `token`
//! cookie is a narrow, best-effort cache whose only consumer is the edge
//! guard, which cannot read the durable store; it is resynchronized at every
//! point the durable store is written, `clear` included, so a logout also
//! revokes the edge guard's signal.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::net::types::User;

/// Durable-store key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Durable-store key for the serialized profile.
pub const USER_KEY: &str = "user";

const COOKIE_MAX_AGE_SECS: u32 = 60 * 60;

/// Contract for the persisted session record.
///
/// `save` writes token then profile in a fixed order; `load` reports absence
/// rather than failing; `clear` removes both fields and is idempotent.
pub trait SessionStore {
    fn save(&self, token: &str, user: &User);
    fn load(&self) -> (Option<String>, Option<User>);
    fn clear(&self);

    /// The stored token alone, for request augmentation.
    fn token(&self) -> Option<String> {
        self.load().0
    }
}

/// `localStorage`-backed store used in the browser. Reads and writes are
/// no-ops outside the `hydrate` build so SSR stays deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn save(&self, token: &str, user: &User) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let _ = storage.set_item(TOKEN_KEY, token);
            if let Some(raw) = encode_user(user) {
                let _ = storage.set_item(USER_KEY, &raw);
            }
            write_cookie(&session_cookie(token));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, user);
        }
    }

    fn load(&self) -> (Option<String>, Option<User>) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return (None, None);
            };
            let token = storage.get_item(TOKEN_KEY).ok().flatten();
            let user = storage
                .get_item(USER_KEY)
                .ok()
                .flatten()
                .and_then(|raw| decode_user(&raw));
            (token, user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            (None, None)
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(USER_KEY);
            }
            write_cookie(&clearing_cookie());
        }
    }

    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// In-memory store for tests and non-browser contexts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn save(&self, token: &str, user: &User) {
        let mut entries = self.entries.borrow_mut();
        entries.insert(TOKEN_KEY.to_owned(), token.to_owned());
        if let Some(raw) = encode_user(user) {
            entries.insert(USER_KEY.to_owned(), raw);
        }
    }

    fn load(&self) -> (Option<String>, Option<User>) {
        let entries = self.entries.borrow();
        let token = entries.get(TOKEN_KEY).cloned();
        let user = entries.get(USER_KEY).and_then(|raw| decode_user(raw));
        (token, user)
    }

    fn clear(&self) {
        let mut entries = self.entries.borrow_mut();
        entries.remove(TOKEN_KEY);
        entries.remove(USER_KEY);
    }
}

/// Serialize a profile for the durable store.
pub fn encode_user(user: &User) -> Option<String> {
    serde_json::to_string(user).ok()
}

/// Deserialize a stored profile; a corrupt record reads as absent.
pub fn decode_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

/// Cookie string duplicating the token for the edge guard, path-scoped to
/// the whole site with a one-hour lifetime.
pub fn session_cookie(token: &str) -> String {
    format!("{TOKEN_KEY}={token}; path=/; max-age={COOKIE_MAX_AGE_SECS}")
}

/// Cookie string that expires the token duplicate immediately.
pub fn clearing_cookie() -> String {
    format!("{TOKEN_KEY}=; path=/; max-age=0")
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn write_cookie(cookie: &str) {
    use wasm_bindgen::JsCast as _;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(html_doc) = doc.dyn_into::<web_sys::HtmlDocument>() {
        let _ = html_doc.set_cookie(cookie);
    }
}
