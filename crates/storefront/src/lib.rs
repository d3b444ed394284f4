//! Vitrina Storefront - the client-side storefront engine.
//!
//! Everything the storefront knows lives in a single per-profile key-value
//! store (the browser localStorage model): the catalog, the registered-users
//! list, the active session, and per-user carts, favorites, and order
//! histories. There is no backend server and no second source of truth.
//!
//! # Modules
//!
//! - [`store`] - the key-value boundary: trait, in-memory and file backends,
//!   JSON codec, change notification, and the key layout
//! - [`catalog`] - catalog repository with a seeded default catalog
//! - [`session`] - login/registration/profile management and the bootstrapped
//!   admin account
//! - [`state`] - per-user cart, favorites, and order state, persisted on
//!   every mutation
//! - [`query`] - pure in-memory filtering and sorting over the catalog
//! - [`checkout`] - order totals, checkout validation, and the external
//!   messaging handoff URL
//! - [`notifications`] / [`reviews`] - peripheral per-user and per-product
//!   persistence surfaces
//!
//! # Failure policy
//!
//! Store reads that fail to parse degrade to "no data" and are logged; store
//! writes that fail are logged and abandoned without rolling back in-memory
//! state. Nothing here retries and nothing is fatal.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod notifications;
pub mod query;
pub mod reviews;
pub mod session;
pub mod state;
pub mod store;
