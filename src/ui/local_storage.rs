//! `localStorage` backed client store

use crate::core::ClientStore;

/// Browser `localStorage`. Reads return `None` and writes are dropped when
/// storage is unavailable, including during server rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

#[cfg(not(feature = "ssr"))]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl ClientStore for LocalStore {
    #[cfg(not(feature = "ssr"))]
    fn get(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok()?
    }

    #[cfg(not(feature = "ssr"))]
    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = storage() {
            if storage.set_item(key, value).is_err() {
                leptos::logging::error!("Failed to write {} to localStorage", key);
            }
        }
    }

    #[cfg(not(feature = "ssr"))]
    fn remove(&self, key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }

    #[cfg(feature = "ssr")]
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    #[cfg(feature = "ssr")]
    fn set(&self, _key: &str, _value: &str) {}

    #[cfg(feature = "ssr")]
    fn remove(&self, _key: &str) {}
}
