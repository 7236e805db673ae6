use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::CredentialStore;

/// In-memory CredentialStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();

        assert!(store.get(ACCESS_TOKEN_KEY).is_none());

        store.set(ACCESS_TOKEN_KEY, "tok-123");
        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("tok-123"));

        // Overwrite
        store.set(ACCESS_TOKEN_KEY, "tok-456");
        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("tok-456"));
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();

        store.set(REFRESH_TOKEN_KEY, "refresh");
        store.remove(REFRESH_TOKEN_KEY);
        assert!(store.get(REFRESH_TOKEN_KEY).is_none());

        // Removing a missing key is a no-op
        store.remove(REFRESH_TOKEN_KEY);
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let view = store.clone();

        store.set(USER_KEY, r#"{"id":1}"#);
        assert_eq!(view.get(USER_KEY).as_deref(), Some(r#"{"id":1}"#));

        view.remove(USER_KEY);
        assert!(store.get(USER_KEY).is_none());
    }
}
