//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tokio::sync::RwLock;

use super::{KeyValueStore, StorageError};

/// `HashMap` store. Nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
    unavailable: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { values: RwLock::new(values), ..Self::default() }
    }

    /// While set, every `get` and `set` fails with [`StorageError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_available()?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.values.write().await.insert(key.to_owned(), value.to_owned());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_values() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);
        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn with_entries_prepopulates() {
        let store = MemoryStore::with_entries([("userName", "Ola")]);
        assert_eq!(store.get("userName").await.unwrap().as_deref(), Some("Ola"));
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn unavailable_store_fails_reads_and_writes() {
        let store = MemoryStore::with_entries([("k", "v")]);
        store.set_unavailable(true);
        assert!(matches!(store.get("k").await, Err(StorageError::Unavailable)));
        assert!(matches!(store.set("k", "w").await, Err(StorageError::Unavailable)));

        store.set_unavailable(false);
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
