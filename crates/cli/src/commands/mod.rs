//! CLI subcommands.

pub mod catalog;
pub mod seed;
pub mod stats;

use std::path::Path;

use vitrina_storefront::config::StorefrontConfig;
use vitrina_storefront::store::{FileStore, KeySpace, SharedStore};

/// Open the store file and resolve the configured key layout.
pub fn open_store(path: &Path) -> Result<(SharedStore, KeySpace), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let store = SharedStore::new(FileStore::open(path));
    Ok((store, config.keyspace()))
}
