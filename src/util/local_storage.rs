//! Browser `localStorage` as a [`KeyValueStore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage can be missing (privacy modes, sandboxed iframes) or full. A
//! missing store reads as empty and rejects writes, so the controller keeps
//! rendering with default state either way.

use crate::state::prefs::{KeyValueStore, PrefsError};

/// Handle to `window.localStorage`, resolved per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage access denied: {err:?}");
                None
            }
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match Self::storage()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("localStorage read of {key} failed: {err:?}");
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let Some(storage) = Self::storage() else {
            return Err(PrefsError::Storage("localStorage unavailable".to_owned()));
        };
        storage
            .set_item(key, value)
            .map_err(|e| PrefsError::Storage(format!("{e:?}")))
    }
}
