use super::*;

/// Durable store double whose reads and writes can be made to fail.
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl PreferenceStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        if self.fail_reads {
            return Err(SiteError::StorageRead { key: key.to_owned(), message: "SecurityError".to_owned() });
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        self.writes += 1;
        if self.fail_writes {
            return Err(SiteError::StorageWrite { key: key.to_owned(), message: "QuotaExceededError".to_owned() });
        }
        self.inner.set(key, value)
    }
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_round_trips_values() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("theme").unwrap(), None);
    store.set("theme", "dark-mode").unwrap();
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark-mode"));
    store.set("theme", "light-mode").unwrap();
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("light-mode"));
}

// =============================================================
// FallbackStore
// =============================================================

#[test]
fn fallback_passes_through_healthy_primary() {
    let mut primary = FlakyStore::default();
    primary.inner.set("theme", "dark-mode").unwrap();
    let mut store = FallbackStore::new(primary);

    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark-mode"));
    store.set("theme", "light-mode").unwrap();
    assert!(!store.is_degraded());
    let primary = store.primary.as_ref().unwrap();
    assert_eq!(primary.inner.get("theme").unwrap().as_deref(), Some("light-mode"));
}

#[test]
fn failed_read_degrades_to_memory() {
    let primary = FlakyStore { fail_reads: true, ..FlakyStore::default() };
    let mut store = FallbackStore::new(primary);

    assert_eq!(store.get("theme").unwrap(), None);
    assert!(store.is_degraded());

    store.set("theme", "dark-mode").unwrap();
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark-mode"));
    assert_eq!(store.primary.as_ref().unwrap().writes, 0);
}

#[test]
fn failed_write_keeps_value_for_session() {
    let primary = FlakyStore { fail_writes: true, ..FlakyStore::default() };
    let mut store = FallbackStore::new(primary);

    store.set("theme", "dark-mode").unwrap();
    assert!(store.is_degraded());
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark-mode"));

    store.set("theme", "light-mode").unwrap();
    assert_eq!(store.primary.as_ref().unwrap().writes, 1);
}

#[test]
fn degraded_store_keeps_last_primary_value() {
    let mut primary = FlakyStore::default();
    primary.inner.set("theme", "dark-mode").unwrap();
    let mut store = FallbackStore::new(primary);
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark-mode"));

    store.primary.as_mut().unwrap().fail_reads = true;
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark-mode"));
    assert!(store.is_degraded());
}

#[test]
fn memory_only_store_starts_degraded() {
    let mut store = FallbackStore::<MemoryStore>::memory_only();
    assert!(store.is_degraded());
    assert_eq!(store.get("theme").unwrap(), None);
    store.set("theme", "light-mode").unwrap();
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("light-mode"));
}
