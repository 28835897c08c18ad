//! Key-value persistence behind the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser exposes `localStorage` as a synchronous string store that can
//! be missing or throw (storage disabled, private browsing quotas). The theme
//! must still work for the current page in that case, so the browser store is
//! wrapped in a [`FallbackStore`] that degrades to session memory on the first
//! failure instead of aborting the pass.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::SiteError;

/// Synchronous string key-value store.
pub trait PreferenceStore {
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, SiteError>;

    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// Store that lives only as long as the page.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Wraps a durable store and switches to memory after its first failure.
///
/// Every value read from or written to the primary is mirrored into memory,
/// so after a failure the session keeps the last known preference. Once
/// degraded the primary is never consulted again.
pub struct FallbackStore<S> {
    primary: Option<S>,
    memory: RefCell<MemoryStore>,
    degraded: Cell<bool>,
}

impl<S: PreferenceStore> FallbackStore<S> {
    pub fn new(primary: S) -> Self {
        Self { primary: Some(primary), memory: RefCell::default(), degraded: Cell::new(false) }
    }

    /// A store with no durable backend at all, used when the browser does not
    /// expose `localStorage`.
    pub fn memory_only() -> Self {
        Self { primary: None, memory: RefCell::default(), degraded: Cell::new(true) }
    }

    /// Whether preferences are currently only kept for this page load.
    pub fn is_degraded(&self) -> bool {
        self.degraded.get()
    }

    fn degrade(&self, err: &SiteError) {
        if !self.degraded.replace(true) {
            log::warn!("{err}; keeping theme preference in memory for this page");
        }
    }

    fn remember(&self, key: &str, value: &str) {
        let _ = self.memory.borrow_mut().set(key, value);
    }
}

impl<S: PreferenceStore> PreferenceStore for FallbackStore<S> {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        if let Some(primary) = self.primary.as_ref().filter(|_| !self.is_degraded()) {
            match primary.get(key) {
                Ok(value) => {
                    if let Some(value) = &value {
                        self.remember(key, value);
                    }
                    return Ok(value);
                }
                Err(err) => self.degrade(&err),
            }
        }
        self.memory.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        self.remember(key, value);
        if self.is_degraded() {
            return Ok(());
        }
        let written = match self.primary.as_mut() {
            Some(primary) => primary.set(key, value),
            None => Ok(()),
        };
        if let Err(err) = written {
            self.degrade(&err);
        }
        Ok(())
    }
}
