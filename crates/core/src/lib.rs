//! Vitrina Core - Shared types library.
//!
//! This crate provides common types used across all Vitrina components:
//! - `storefront` - Client-side storefront engine (catalog, cart, sessions)
//! - `admin` - Dashboard aggregation and catalog management
//! - `cli` - Command-line tools for seeding and inspection
//!
//! # Architecture
//!
//! The core crate contains only types and pure arithmetic - no I/O and no
//! storage access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and the
//!   persisted domain records (products, users, carts, orders)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
