//! Catalog repository.
//!
//! The catalog is one JSON array under one store key. Reads fall back to a
//! fixed default catalog when the stored value is absent or unreadable;
//! writes replace the whole array (last writer wins — there is no
//! partial-update protocol and exactly one logical writer).

mod defaults;

pub use defaults::default_catalog;

use tracing::warn;

use vitrina_core::{Product, ProductId};

use crate::store::{SharedStore, StoreError};

/// Loads and saves the product catalog.
#[derive(Clone)]
pub struct CatalogRepository {
    store: SharedStore,
    key: String,
}

impl CatalogRepository {
    /// Create a repository reading the catalog under `key`.
    pub fn new(store: SharedStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The current catalog.
    ///
    /// Returns the stored catalog when present and structurally a product
    /// list. An unreadable stored value is left in place (not repaired):
    /// disposable keys are pruned to claw back quota and the default catalog
    /// is returned from memory. When no catalog is stored at all, the default
    /// catalog is seeded (best-effort) and returned.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        match self.store.get_raw(&self.key) {
            Some(raw) => match serde_json::from_str::<Vec<Product>>(&raw) {
                Ok(products) => products,
                Err(error) => {
                    warn!(key = %self.key, %error, "stored catalog is unreadable, using defaults");
                    self.store.prune_disposable();
                    default_catalog()
                }
            },
            None => {
                let products = default_catalog();
                if let Err(error) = self.store.set_json(&self.key, &products) {
                    warn!(key = %self.key, %error, "could not seed default catalog");
                }
                products
            }
        }
    }

    /// Look up a single product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<Product> {
        self.products().into_iter().find(|p| &p.id == id)
    }

    /// Replace the entire stored catalog.
    ///
    /// # Errors
    ///
    /// Propagates the store error; the stored catalog is unchanged on
    /// failure.
    pub fn save_products(&self, products: &[Product]) -> Result<(), StoreError> {
        self.store.set_json(&self.key, &products)
    }
}
