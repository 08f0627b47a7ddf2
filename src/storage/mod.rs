//! Local key-value storage
//!
//! The watchlist store only needs `get`/`set` of whole string values, so
//! every backend exposes exactly that.

mod file;
mod memory;
mod migrations;
mod sqlite;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::{AppError, Result};
use std::sync::Arc;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// SQLite database file inside the data directory
pub const SQLITE_FILE: &str = "stockwatch.db";

/// Key-value storage primitive
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Keys are used as file names by the file backend
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(AppError::Validation(format!("Invalid storage key: {:?}", key)))
    }
}

/// Open the configured backend
pub fn open(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.backend {
        StorageBackend::Sqlite => {
            std::fs::create_dir_all(&config.data_dir)?;
            Arc::new(SqliteStore::new(&config.data_dir.join(SQLITE_FILE))?)
        }
        StorageBackend::File => Arc::new(FileStore::new(config.data_dir.clone())?),
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
    };

    tracing::info!("Opened {:?} storage in {:?}", config.backend, config.data_dir);
    Ok(store)
}
