//! Durable client-side key/value storage and the process-wide client state
//! built on top of it.
//!
//! In the browser the store is backed by `window.localStorage`; during SSR and
//! in tests an in-memory map stands in for it. Components never touch the
//! storage directly: they read the [`ClientState`] provided at the app root.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use leptos::logging;
use leptos::prelude::*;

/// Opaque bearer credential for the current session.
pub const TOKEN_KEY: &str = "token";
/// Persisted colour theme, `"dark"` or `"light"`.
pub const THEME_KEY: &str = "theme";
/// Cached profile data, only ever cleared here.
pub const USER_DATA_KEY: &str = "userData";

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Only usable in the browser.
///
/// Storage can be disabled (private browsing, quota, sandboxed iframes); every
/// failure is logged and treated as an absent value.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                logging::warn!("localStorage is unavailable: {err:?}");
                None
            }
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage()
            && let Err(err) = storage.set_item(key, value)
        {
            logging::warn!("Failed to persist '{key}': {err:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage()
            && let Err(err) = storage.remove_item(key)
        {
            logging::warn!("Failed to remove '{key}': {err:?}");
        }
    }
}

/// Shared in-memory store. Clones see the same entries.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> R {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut entries)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        self.with_entries(|entries| {
            entries.insert(key.to_owned(), value.to_owned());
        });
    }

    fn remove(&self, key: &str) {
        self.with_entries(|entries| {
            entries.remove(key);
        });
    }
}

/// Process-wide client state: the durable store plus the session/theme
/// accessors that are allowed to mutate it.
#[derive(Clone)]
pub struct ClientState {
    store: Arc<dyn KeyValueStore>,
}

impl core::fmt::Debug for ClientState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClientState").finish_non_exhaustive()
    }
}

impl ClientState {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Browser storage when hydrating, memory otherwise.
    #[must_use]
    pub fn for_current_target() -> Self {
        if cfg!(feature = "hydrate") {
            Self::new(BrowserStorage)
        } else {
            Self::new(MemoryStore::new())
        }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// The stored bearer token. An empty value counts as absent.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    pub fn clear_token(&self) {
        self.store.remove(TOKEN_KEY);
    }

    /// Drops the credential and any cached profile.
    pub fn clear_session(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_DATA_KEY);
    }
}

/// Creates the client state for this app instance and provides it as context.
pub fn provide_client_state() -> ClientState {
    let state = ClientState::for_current_target();
    provide_context(state.clone());
    state
}

/// The client state provided at the root, or a fresh in-memory one when a
/// component is rendered on its own.
pub fn use_client_state() -> ClientState {
    use_context::<ClientState>().unwrap_or_else(ClientState::in_memory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);

        store.set(THEME_KEY, "dark");
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        store.set(THEME_KEY, "light");
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));

        store.remove(THEME_KEY);
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set(TOKEN_KEY, "abc");
        assert_eq!(other.get(TOKEN_KEY).as_deref(), Some("abc"));
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let state = ClientState::in_memory();
        assert_eq!(state.token(), None);

        state.set_token("");
        assert_eq!(state.token(), None);

        state.set_token("secret");
        assert_eq!(state.token().as_deref(), Some("secret"));
    }

    #[test]
    fn clear_session_removes_token_and_user_data_only() {
        let store = MemoryStore::new();
        let state = ClientState::new(store.clone());
        store.set(TOKEN_KEY, "secret");
        store.set(USER_DATA_KEY, "{\"name\":\"Jane\"}");
        store.set(THEME_KEY, "dark");

        state.clear_session();

        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(USER_DATA_KEY), None);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn ssr_build_uses_memory_store() {
        // The default feature set is `ssr`; the browser store must not be picked.
        if !cfg!(feature = "hydrate") {
            let state = ClientState::for_current_target();
            state.set_token("t");
            assert_eq!(state.token().as_deref(), Some("t"));
        }
    }
}
