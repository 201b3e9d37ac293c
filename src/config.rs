//! Application configuration parsed from environment variables.
//!
//! Every value has a default so the app starts with no environment at all.
//! The binary loads `.env` (via `dotenvy`) before calling [`AppConfig::from_env`],
//! and CLI flags override individual values afterwards.

use crate::services::settings::Language;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://shoplist.db";
pub const DEFAULT_PERSIST_QUEUE_CAPACITY: usize = 256;
pub const DEFAULT_PERSIST_BATCH_SIZE: usize = 32;

/// Tuning knobs for the persistence worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistConfig {
    /// Bounded channel capacity for queued saves.
    pub queue_capacity: usize,
    /// Maximum queued saves coalesced into one write pass.
    pub batch_size: usize,
}

impl PersistConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            queue_capacity: env_parse("PERSIST_QUEUE_CAPACITY", DEFAULT_PERSIST_QUEUE_CAPACITY).max(1),
            batch_size: env_parse("PERSIST_BATCH_SIZE", DEFAULT_PERSIST_BATCH_SIZE).max(1),
        }
    }
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self { queue_capacity: DEFAULT_PERSIST_QUEUE_CAPACITY, batch_size: DEFAULT_PERSIST_BATCH_SIZE }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub language: Language,
    pub persist: PersistConfig,
}

impl AppConfig {
    /// Build config from environment variables.
    ///
    /// - `SHOPLIST_DATABASE_URL`: `SQLite` URL, default `sqlite://shoplist.db`
    /// - `SHOPLIST_LANG`: `en` (default), `fi`, `sv` or `de`; unknown codes fall back to `en`
    /// - `PERSIST_QUEUE_CAPACITY`: default 256
    /// - `PERSIST_BATCH_SIZE`: default 32
    #[must_use]
    pub fn from_env() -> Self {
        let database_url = std::env::var("SHOPLIST_DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let language = std::env::var("SHOPLIST_LANG")
            .ok()
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();
        Self { database_url, language, persist: PersistConfig::from_env() }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { database_url: DEFAULT_DATABASE_URL.to_string(), language: Language::default(), persist: PersistConfig::default() }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
