//! Shared store handle: JSON codec plus change notification.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{DISPOSABLE_PREFIXES, KeyValueStore, StoreError};

/// Identifies a change subscription so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&str) + Send + Sync>;

struct Inner {
    store: Box<dyn KeyValueStore>,
    subscribers: RwLock<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: AtomicU64,
}

/// Cheaply-cloneable handle over a [`KeyValueStore`] backend.
///
/// Adds the two concerns every component shares:
///
/// - **JSON codec**: values are stored as JSON strings. A value that fails to
///   parse is treated as absent (logged, never propagated), per the
///   degraded-read policy.
/// - **Change notification**: subscribers are invoked with the changed key
///   after every successful write or removal. This replaces cross-tab
///   storage-event listening and interval polling with an explicit
///   publish/subscribe seam.
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<Inner>,
}

impl SharedStore {
    /// Wrap a backend.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            inner: Arc::new(Inner {
                store: Box::new(store),
                subscribers: RwLock::new(Vec::new()),
                next_subscription: AtomicU64::new(0),
            }),
        }
    }

    /// Raw string read.
    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.inner.store.get(key)
    }

    /// Raw string write. Notifies subscribers on success.
    ///
    /// # Errors
    ///
    /// Propagates the backend error ([`StoreError::QuotaExceeded`] or I/O).
    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.store.set(key, value)?;
        self.notify(key);
        Ok(())
    }

    /// Read and decode a JSON value.
    ///
    /// Missing keys and undecodable values both yield `None`; decode failures
    /// are logged. Store reads never fail the caller.
    #[must_use]
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.inner.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(key, %error, "stored value is unreadable, treating as absent");
                None
            }
        }
    }

    /// Encode and write a JSON value. Notifies subscribers on success.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Codec`] if encoding fails, otherwise the
    /// backend error.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw)
    }

    /// Remove a key. Notifies subscribers.
    pub fn remove(&self, key: &str) {
        self.inner.store.remove(key);
        self.notify(key);
    }

    /// All keys currently present.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.inner.store.keys()
    }

    /// Remove every key with a recognized disposable prefix (`temp_`,
    /// `cache_`). Returns how many keys were removed.
    ///
    /// This is the only quota mitigation the storefront performs.
    pub fn prune_disposable(&self) -> usize {
        let disposable: Vec<String> = self
            .keys()
            .into_iter()
            .filter(|key| DISPOSABLE_PREFIXES.iter().any(|p| key.starts_with(p)))
            .collect();

        for key in &disposable {
            self.remove(key);
        }

        if !disposable.is_empty() {
            debug!(count = disposable.len(), "pruned disposable keys");
        }
        disposable.len()
    }

    /// Register a change subscriber. The callback receives the key of every
    /// successful write or removal.
    pub fn subscribe(&self, subscriber: impl Fn(&str) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.inner
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Box::new(subscriber)));
        id
    }

    /// Cancel a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(sub_id, _)| *sub_id != id);
    }

    fn notify(&self, key: &str) {
        let subscribers = self
            .inner
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for (_, subscriber) in subscribers.iter() {
            subscriber(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::super::MemoryStore;
    use super::*;

    #[test]
    fn test_json_roundtrip() {
        let store = SharedStore::new(MemoryStore::new());
        store.set_json("k", &vec![1u32, 2, 3]).expect("set");
        assert_eq!(store.get_json::<Vec<u32>>("k"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_unreadable_value_is_absent() {
        let store = SharedStore::new(MemoryStore::new());
        store.set_raw("k", "{not json").expect("set");
        assert_eq!(store.get_json::<Vec<u32>>("k"), None);
        // the corrupt raw value is left in place, not repaired
        assert_eq!(store.get_raw("k").as_deref(), Some("{not json"));
    }

    #[test]
    fn test_subscribers_observe_writes_and_removals() {
        let store = SharedStore::new(MemoryStore::new());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |key| {
            sink.lock().expect("lock").push(key.to_owned());
        });

        store.set_raw("a", "1").expect("set");
        store.remove("a");

        assert_eq!(
            *seen.lock().expect("lock"),
            vec!["a".to_owned(), "a".to_owned()]
        );

        store.unsubscribe(id);
        store.set_raw("b", "2").expect("set");
        assert_eq!(seen.lock().expect("lock").len(), 2);
    }

    #[test]
    fn test_failed_write_does_not_notify() {
        let store = SharedStore::new(MemoryStore::with_capacity(2));
        let seen = Arc::new(Mutex::new(0usize));

        let sink = Arc::clone(&seen);
        store.subscribe(move |_| *sink.lock().expect("lock") += 1);

        assert!(store.set_raw("key", "far too large").is_err());
        assert_eq!(*seen.lock().expect("lock"), 0);
    }

    #[test]
    fn test_prune_disposable() {
        let store = SharedStore::new(MemoryStore::new());
        store.set_raw("temp_x", "1").expect("set");
        store.set_raw("cache_y", "2").expect("set");
        store.set_raw("vitrina_products", "[]").expect("set");

        assert_eq!(store.prune_disposable(), 2);
        assert!(store.get_raw("temp_x").is_none());
        assert!(store.get_raw("vitrina_products").is_some());
    }
}
