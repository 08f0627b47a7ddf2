//! File-based key-value store
//!
//! One `<key>.json` file per key. Writes land in a temporary sibling first
//! and are renamed into place, so a reader never sees half a value.

use super::{validate_key, KeyValueStore};
use crate::error::{AppError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Directory of JSON files
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir).map_err(|e| {
            AppError::Storage(format!("Failed to create data dir {:?}: {}", data_dir, e))
        })?;

        Ok(Self { data_dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.data_dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(format!("Failed to read {:?}: {}", path, e))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        fs::write(&tmp_path, value)
            .map_err(|e| AppError::Storage(format!("Failed to write {:?}: {}", tmp_path, e)))?;
        fs::rename(&tmp_path, &path)
            .map_err(|e| AppError::Storage(format!("Failed to replace {:?}: {}", path, e)))?;

        Ok(())
    }
}
