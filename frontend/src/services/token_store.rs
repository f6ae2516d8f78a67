use gloo::storage::{LocalStorage, Storage};
use shared::TokenStore;
use crate::services::logging::Logger;

/// Keeps the access token in `window.localStorage` under a configured key
#[derive(Debug, Clone)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::get::<String>(&self.key).ok()
    }

    fn save(&self, token: &str) {
        if let Err(e) = LocalStorage::set(&self.key, token) {
            Logger::error_with_component("session", &format!("Failed to persist access token: {}", e));
        }
    }

    fn clear(&self) {
        LocalStorage::delete(&self.key);
    }
}
