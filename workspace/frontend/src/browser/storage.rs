use web_sys::Storage;

use crate::storage::{KeyValueStore, MemoryStore};

/// `localStorage`, falling back to memory when the browser refuses access.
pub struct LocalStore {
    storage: Option<Storage>,
    fallback: MemoryStore,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, settings will not persist");
        }
        Self {
            storage,
            fallback: MemoryStore::new(),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Option<String> {
        match &self.storage {
            Some(storage) => storage.get_item(key).ok().flatten(),
            None => self.fallback.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        match &self.storage {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("Failed to persist {}: {:?}", key, e);
                }
            }
            None => self.fallback.set_item(key, value),
        }
    }
}
