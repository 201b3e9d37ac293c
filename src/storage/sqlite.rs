//! `SQLite`-backed key-value store.
//!
//! Each `set` is one upsert statement, so a crash mid-write leaves the
//! previous value in place.

use sqlx::SqlitePool;

use super::{KeyValueStore, StorageError};

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database at `database_url` and run migrations.
    ///
    /// # Errors
    ///
    /// Returns a database error if the pool or migrations fail.
    pub async fn open(database_url: &str) -> Result<Self, StorageError> {
        let pool = crate::db::init_pool(database_url).await?;
        Ok(Self::new(pool))
    }

    /// Fresh in-memory database.
    ///
    /// # Errors
    ///
    /// Returns a database error if the pool or migrations fail.
    pub async fn open_in_memory() -> Result<Self, StorageError> {
        let pool = crate::db::init_memory_pool().await?;
        Ok(Self::new(pool))
    }

    /// Close the pool, waiting for in-flight statements.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait::async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query_as::<_, (String,)>("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(value,)| value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "sqlite_test.rs"]
mod tests;
