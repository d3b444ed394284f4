//! In-memory store backend.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::{KeyValueStore, StoreError};

/// A [`KeyValueStore`] backed by a hash map.
///
/// Optionally capacity-bounded: with a byte budget set, writes that would
/// push the total size of keys plus values past the budget fail with
/// [`StoreError::QuotaExceeded`], mirroring the browser storage quota.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: RwLock<HashMap<String, String>>,
    capacity: Option<usize>,
}

impl MemoryStore {
    /// Create an unbounded in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that refuses writes past `capacity` total bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
            capacity: Some(capacity),
        }
    }

    /// Bytes currently used (sum of key and value lengths).
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        let map = self.map.read().unwrap_or_else(PoisonError::into_inner);
        usage_of(&map)
    }
}

fn usage_of(map: &HashMap<String, String>) -> usize {
    map.iter().map(|(k, v)| k.len() + v.len()).sum()
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.map.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(capacity) = self.capacity {
            let existing = map.get(key).map_or(0, |v| key.len() + v.len());
            let next = usage_of(&map) - existing + key.len() + value.len();
            if next > capacity {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_owned(),
                });
            }
        }

        map.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.map
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("a").is_none());

        store.set("a", "1").expect("set");
        assert_eq!(store.get("a").as_deref(), Some("1"));

        store.remove("a");
        assert!(store.get("a").is_none());
        // removing again is a no-op
        store.remove("a");
    }

    #[test]
    fn test_quota_refuses_writes() {
        let store = MemoryStore::with_capacity(8);
        store.set("ab", "cd").expect("fits"); // 4 bytes

        let err = store.set("xy", "zzzzzzz").expect_err("over budget");
        assert!(matches!(err, StoreError::QuotaExceeded { .. }));

        // the failed write left nothing behind
        assert!(store.get("xy").is_none());
        assert_eq!(store.used_bytes(), 4);
    }

    #[test]
    fn test_quota_accounts_for_replacement() {
        let store = MemoryStore::with_capacity(10);
        store.set("k", "aaaaaaaa").expect("fits"); // 9 bytes
        // replacing should measure against the replaced size, not add to it
        store.set("k", "bbbbbbbb").expect("replacement fits");
    }
}
