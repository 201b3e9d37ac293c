//! Local key-value storage behind the persistence adapter.
//!
//! DESIGN
//! ======
//! The persistence adapter only needs `get` and `set` on string keys, so the
//! seam is a small async trait. `SqliteStore` is the on-device backend;
//! `MemoryStore` backs tests and ephemeral runs and can simulate the store
//! becoming unavailable.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Errors produced by a [`KeyValueStore`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The underlying database rejected the read or write.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store cannot be reached at all (device fault, permissions).
    #[error("storage unavailable")]
    Unavailable,
}

/// String-keyed durable storage.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`. `Ok(None)` when the key is unset.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the store cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the store cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
