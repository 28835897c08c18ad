//! `localStorage` as a [`PreferenceStore`].

use web_sys::Storage;

use crate::error::{SiteError, js_message};
use crate::util::storage::{FallbackStore, PreferenceStore};

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// # Errors
    ///
    /// Returns [`SiteError::StorageUnavailable`] when there is no window or the
    /// browser refuses access to `localStorage`.
    pub fn open() -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or_else(|| SiteError::StorageUnavailable("no window".to_owned()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(SiteError::StorageUnavailable("localStorage is not exposed".to_owned())),
            Err(err) => Err(SiteError::StorageUnavailable(js_message(&err))),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        self.storage
            .get_item(key)
            .map_err(|err| SiteError::StorageRead { key: key.to_owned(), message: js_message(&err) })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| SiteError::StorageWrite { key: key.to_owned(), message: js_message(&err) })
    }
}

/// `localStorage` with session-memory fallback.
pub fn browser_store() -> FallbackStore<LocalStorage> {
    match LocalStorage::open() {
        Ok(storage) => FallbackStore::new(storage),
        Err(err) => {
            log::warn!("{err}; theme preference will not persist");
            FallbackStore::memory_only()
        }
    }
}
