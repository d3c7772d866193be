//! Favorites and selected-city persistence over a key-value store.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the backing store is `window.localStorage`
//! (`util::local_storage`). Tests and native builds use [`MemoryStorage`].
//!
//! ERROR HANDLING
//! ==============
//! Reads report malformed favorites data as [`PrefsError::Parse`] so callers
//! can tell "nothing saved" apart from "saved data is garbage". The controller
//! collapses both to an empty set at its public boundary.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::Config;
use crate::state::favorites::Favorites;

/// Errors raised by preference reads and writes.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("stored favorites are not a JSON string array: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to encode favorites: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("storage write rejected: {0}")]
    Storage(String),
}

/// Raw string key-value storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Storage`] if the store rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// Typed access to the two persisted preferences.
pub trait PreferenceStore {
    /// Current favorites. Absent or empty data is an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Parse`] when the stored value is not a JSON array
    /// of strings.
    fn favorites(&self) -> Result<Favorites, PrefsError>;

    /// Replace the stored favorites.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the underlying write fails.
    fn set_favorites(&self, favorites: &Favorites) -> Result<(), PrefsError>;

    /// Selected city, or `""` when none is stored.
    fn city(&self) -> String;

    /// Replace the selected city. `""` clears the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails.
    fn set_city(&self, city: &str) -> Result<(), PrefsError>;
}

/// In-memory [`KeyValueStore`]. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    reject_writes: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses every write, like a full or disabled `localStorage`.
    #[must_use]
    pub fn rejecting() -> Self {
        Self {
            reject_writes: true,
            ..Self::default()
        }
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        if self.reject_writes {
            return Err(PrefsError::Storage(format!("write to {key} refused")));
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// [`PreferenceStore`] encoding favorites as JSON and the city as raw text.
#[derive(Clone, Debug)]
pub struct StoragePrefs<K> {
    store: K,
    favorites_key: String,
    city_key: String,
}

impl<K: KeyValueStore> StoragePrefs<K> {
    pub fn new(store: K, config: &Config) -> Self {
        Self {
            store,
            favorites_key: config.favorites_key.clone(),
            city_key: config.city_key.clone(),
        }
    }

    /// The backing store.
    pub fn store(&self) -> &K {
        &self.store
    }
}

impl<K: KeyValueStore> PreferenceStore for StoragePrefs<K> {
    fn favorites(&self) -> Result<Favorites, PrefsError> {
        match self.store.get_item(&self.favorites_key) {
            None => Ok(Favorites::new()),
            Some(raw) if raw.is_empty() => Ok(Favorites::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(PrefsError::Parse),
        }
    }

    fn set_favorites(&self, favorites: &Favorites) -> Result<(), PrefsError> {
        let raw = serde_json::to_string(favorites).map_err(PrefsError::Encode)?;
        self.store.set_item(&self.favorites_key, &raw)
    }

    fn city(&self) -> String {
        self.store.get_item(&self.city_key).unwrap_or_default()
    }

    fn set_city(&self, city: &str) -> Result<(), PrefsError> {
        self.store.set_item(&self.city_key, city)
    }
}
