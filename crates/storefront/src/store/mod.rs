//! The key-value storage boundary.
//!
//! The storefront's only database is a synchronous string key/value store
//! with the semantics of browser local storage: `get` cannot fail (a missing
//! or unreadable value is simply absent), `set` can fail when the capacity
//! quota is exhausted, and there is exactly one logical writer.
//!
//! [`KeyValueStore`] is the swap point: [`MemoryStore`] for tests and
//! embedding, [`FileStore`] for the CLI. [`SharedStore`] wraps any backend
//! with the JSON codec and change notification that the rest of the crate
//! works through.

mod file;
mod keys;
mod memory;
mod shared;

pub use file::FileStore;
pub use keys::{DISPOSABLE_PREFIXES, KeySpace};
pub use memory::MemoryStore;
pub use shared::{SharedStore, SubscriptionId};

use thiserror::Error;

/// Errors raised by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend refused the write because its capacity is exhausted.
    #[error("storage quota exceeded writing key {key}")]
    QuotaExceeded {
        /// Key whose write was refused.
        key: String,
    },

    /// A value could not be encoded as JSON.
    #[error("could not encode value for storage: {0}")]
    Codec(#[from] serde_json::Error),

    /// The file backend could not persist to disk.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A synchronous string key/value store.
///
/// All methods take `&self`; implementations use interior mutability. Reads
/// never fail: a corrupt or missing value is `None`. Writes may fail with
/// [`StoreError::QuotaExceeded`] (or I/O errors for disk-backed stores).
pub trait KeyValueStore: Send + Sync {
    /// Retrieve a value by key. `None` if the key does not exist.
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or replace a value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::QuotaExceeded`] when the backend is full, or
    /// [`StoreError::Io`] for disk-backed stores that cannot persist.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a value by key. Removing an absent key is a no-op.
    fn remove(&self, key: &str);

    /// All keys currently present, in no particular order.
    fn keys(&self) -> Vec<String>;
}
