//! Seed a store file with the default catalog.

use std::path::Path;

use tracing::info;

use vitrina_storefront::catalog::{CatalogRepository, default_catalog};

use super::open_store;

/// Write the default catalog into the store file.
///
/// Refuses to overwrite an existing catalog unless `force` is set.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the catalog cannot
/// be written.
pub fn run(store_path: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (store, keys) = open_store(store_path)?;

    if !force && store.get_raw(&keys.products()).is_some() {
        println!(
            "{} already has a catalog; rerun with --force to overwrite",
            store_path.display()
        );
        return Ok(());
    }

    let products = default_catalog();
    let repo = CatalogRepository::new(store, keys.products());
    repo.save_products(&products)?;

    info!(count = products.len(), path = %store_path.display(), "seeded catalog");
    println!(
        "Seeded {} products into {}",
        products.len(),
        store_path.display()
    );
    Ok(())
}
