//! # Key/value storage abstraction
//!
//! The admin session lives in a flat string-to-string store: the browser's
//! `localStorage` on the web platform, a [`crate::MemoryStore`] in tests and
//! native builds. [`KeyValueStore`] is the read-only seam the session guard is
//! written against, so the guard never touches a platform API directly.

/// Read access to a string key/value store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` when the key is absent
    /// or the backing store is unavailable.
    fn get(&self, key: &str) -> Option<String>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
