//! # localStorage credential store — browser-side persistence
//!
//! [`WebStore`] is the [`CredentialStore`] implementation used on the **web
//! platform**. It reads and writes `window.localStorage` directly, so the
//! stored keys are visible to (and shared with) any other tab on the same
//! origin.
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled degrades to
//! "no persisted session" rather than crashing; the authoritative session
//! state always lives with the backend's token issuer.

use crate::CredentialStore;

/// localStorage-backed CredentialStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct WebStore;

impl WebStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl CredentialStore for WebStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
