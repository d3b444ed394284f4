//! Catalog management.
//!
//! Admin-only product CRUD. Every operation reads the full catalog,
//! transforms it, and rewrites it as one unit through the repository —
//! there is no partial-update protocol and the last writer wins.

use chrono::Utc;
use thiserror::Error;
use tracing::info;

use vitrina_core::{Category, Price, Product, ProductId};
use vitrina_storefront::catalog::CatalogRepository;
use vitrina_storefront::store::StoreError;

/// Errors surfaced by catalog management.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The product to update does not exist.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// The rewritten catalog could not be persisted; the stored catalog is
    /// unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Fields an admin supplies for a new product; the id is assigned here.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
    pub image: String,
    pub category: Category,
    pub description: String,
    pub in_stock: bool,
    pub featured: bool,
    pub brand: Option<String>,
}

/// Admin surface for catalog mutation.
pub struct ProductManager {
    repo: CatalogRepository,
}

impl ProductManager {
    #[must_use]
    pub const fn new(repo: CatalogRepository) -> Self {
        Self { repo }
    }

    /// Add a product with a freshly assigned timestamp id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Store`] if the catalog cannot be rewritten.
    pub fn create_product(&self, new: NewProduct) -> Result<Product, CatalogError> {
        let product = Product {
            id: ProductId::from_timestamp(Utc::now()),
            name: new.name,
            price: new.price,
            image: new.image,
            category: new.category,
            description: new.description,
            in_stock: new.in_stock,
            featured: new.featured,
            brand: new.brand,
            rating: None,
        };

        let mut products = self.repo.products();
        products.push(product.clone());
        self.repo.save_products(&products)?;

        info!(product = %product.id, "product created");
        Ok(product)
    }

    /// Replace a product in place, matched by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no product has that id, or
    /// [`CatalogError::Store`] if the catalog cannot be rewritten.
    pub fn update_product(&self, product: Product) -> Result<(), CatalogError> {
        let mut products = self.repo.products();
        let entry = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| CatalogError::NotFound(product.id.clone()))?;

        *entry = product;
        self.repo.save_products(&products)?;
        Ok(())
    }

    /// Remove a product. Removing an absent id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Store`] if the catalog cannot be rewritten.
    pub fn delete_product(&self, id: &ProductId) -> Result<(), CatalogError> {
        let mut products = self.repo.products();
        let before = products.len();
        products.retain(|p| &p.id != id);

        if products.len() != before {
            self.repo.save_products(&products)?;
            info!(product = %id, "product deleted");
        }
        Ok(())
    }
}
