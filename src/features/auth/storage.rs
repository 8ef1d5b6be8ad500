//! Persisted session state: the token pair and a cached profile snapshot,
//! each under a fixed storage key. Only this module and the HTTP layer's
//! refresh path write these keys. On wasm the backing store is the browser's
//! `localStorage`; on other targets an in-process map stands in so the
//! session lifecycle can be exercised by host tests.

use crate::features::auth::types::{AuthTokens, User};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_DATA_KEY: &str = "user_data";

pub fn access_token() -> Option<String> {
    read(ACCESS_TOKEN_KEY)
}

pub fn refresh_token() -> Option<String> {
    read(REFRESH_TOKEN_KEY)
}

/// Persists a freshly issued token pair. Callers must only do this after the
/// whole login sequence (token exchange plus profile fetch) has succeeded.
pub fn store_tokens(tokens: &AuthTokens) {
    write(ACCESS_TOKEN_KEY, &tokens.access);
    write(REFRESH_TOKEN_KEY, &tokens.refresh);
}

/// Replaces only the access token, used by the refresh path.
pub fn store_access_token(access: &str) {
    write(ACCESS_TOKEN_KEY, access);
}

pub fn cached_user() -> Option<User> {
    read(USER_DATA_KEY).and_then(|raw| serde_json::from_str(&raw).ok())
}

pub fn store_cached_user(user: &User) {
    if let Ok(raw) = serde_json::to_string(user) {
        write(USER_DATA_KEY, &raw);
    }
}

/// Removes every persisted session key. Logout and unrecoverable refresh
/// failures both end up here; the operation never fails.
pub fn clear() {
    remove(ACCESS_TOKEN_KEY);
    remove(REFRESH_TOKEN_KEY);
    remove(USER_DATA_KEY);
}

#[cfg(target_arch = "wasm32")]
fn read(key: &str) -> Option<String> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok()).flatten()?;
    storage.get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn write(key: &str, value: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(target_arch = "wasm32")]
fn remove(key: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        pub(super) static STORE: RefCell<HashMap<String, String>> =
            RefCell::new(HashMap::new());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read(key: &str) -> Option<String> {
    host::STORE.with(|store| store.borrow().get(key).cloned())
}

#[cfg(not(target_arch = "wasm32"))]
fn write(key: &str, value: &str) {
    host::STORE.with(|store| {
        store.borrow_mut().insert(key.to_string(), value.to_string());
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn remove(key: &str) {
    host::STORE.with(|store| {
        store.borrow_mut().remove(key);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::types::UserRole;

    fn tokens() -> AuthTokens {
        AuthTokens {
            access: "access-abc".to_string(),
            refresh: "refresh-def".to_string(),
        }
    }

    fn user() -> User {
        User {
            id: 3,
            email: "pedro@example.com".to_string(),
            first_name: "Pedro".to_string(),
            last_name: "Lima".to_string(),
            full_name: "Pedro Lima".to_string(),
            user_type: UserRole::Producer,
            phone: String::new(),
            avatar: None,
            is_active: Some(true),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn token_pair_round_trips() {
        clear();
        store_tokens(&tokens());

        assert_eq!(access_token().as_deref(), Some("access-abc"));
        assert_eq!(refresh_token().as_deref(), Some("refresh-def"));
    }

    #[test]
    fn refresh_path_replaces_only_the_access_token() {
        clear();
        store_tokens(&tokens());
        store_access_token("access-new");

        assert_eq!(access_token().as_deref(), Some("access-new"));
        assert_eq!(refresh_token().as_deref(), Some("refresh-def"));
    }

    #[test]
    fn cached_user_round_trips() {
        clear();
        store_cached_user(&user());

        let snapshot = cached_user().expect("cached user");
        assert_eq!(snapshot, user());
    }

    #[test]
    fn clear_removes_every_session_key() {
        store_tokens(&tokens());
        store_cached_user(&user());

        clear();

        assert_eq!(access_token(), None);
        assert_eq!(refresh_token(), None);
        assert!(cached_user().is_none());
    }
}
