//! File-backed store backend.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use tracing::warn;

use super::{KeyValueStore, StoreError};

/// A [`KeyValueStore`] persisted as one JSON object in a file.
///
/// The whole map is loaded on open and rewritten on every mutation, matching
/// the single-writer model of the store boundary. An unreadable or corrupt
/// file degrades to an empty store rather than failing to open.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    map: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open a store file, creating an empty store if the file is missing or
    /// unreadable.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(error) => {
                    warn!(path = %path.display(), %error, "store file is corrupt, starting empty");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            map: RwLock::new(map),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, map: &HashMap<String, String>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(map)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.map.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(key.to_owned(), value.to_owned());
        self.persist(&map)
    }

    fn remove(&self, key: &str) {
        let mut map = self.map.write().unwrap_or_else(PoisonError::into_inner);
        if map.remove(key).is_some()
            && let Err(error) = self.persist(&map)
        {
            warn!(key, %error, "could not persist removal");
        }
    }

    fn keys(&self) -> Vec<String> {
        self.map
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}
