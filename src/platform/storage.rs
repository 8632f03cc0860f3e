//! `localStorage` preference store.

use gloo::storage::{LocalStorage, Storage};
use orbitlink_core::{PreferenceStore, SiteError, SiteResult};

/// Raw string access to `window.localStorage`.
///
/// Values are stored unencoded (`dark`, `1`) so they stay readable by the
/// other pages sharing the same keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> SiteResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| SiteError::Storage(format!("{}: {:?}", key, e)))
    }
}
