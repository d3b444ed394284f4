//! List the catalog.

use std::path::Path;

use vitrina_core::Category;
use vitrina_storefront::catalog::CatalogRepository;
use vitrina_storefront::query::{ProductQuery, search_products};

use super::open_store;

/// Print the catalog, optionally restricted to one category, sorted by name.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn list(store_path: &Path, category: Option<Category>) -> Result<(), Box<dyn std::error::Error>> {
    let (store, keys) = open_store(store_path)?;
    let repo = CatalogRepository::new(store, keys.products());

    let query = ProductQuery::basic(None, category);
    let products = search_products(&repo.products(), &query);

    println!("{:<16} {:<40} {:<18} {:>12}  stock", "ID", "NAME", "CATEGORY", "PRICE");
    for product in &products {
        println!(
            "{:<16} {:<40} {:<18} {:>12}  {}",
            product.id,
            product.name,
            product.category,
            product.price.to_string(),
            if product.in_stock { "yes" } else { "no" },
        );
    }
    println!("{} products", products.len());
    Ok(())
}
