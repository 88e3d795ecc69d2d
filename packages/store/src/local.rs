//! # Browser `localStorage` store
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. It reads
//! straight from `window.localStorage` through `web-sys`.
//!
//! Every failure (no window, storage disabled by the browser, a throwing getter)
//! reads as an absent key. The session guard treats absent keys as "not an
//! admin", so a broken storage simply hides the admin controls.

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }
}
