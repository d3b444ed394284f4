//! Core types for Vitrina.
//!
//! This module provides type-safe wrappers for common domain concepts and the
//! persisted record types. Persisted structs serialize with camelCase field
//! names so the stored JSON matches the layout the storefront has always used.

pub mod cart;
pub mod category;
pub mod email;
pub mod id;
pub mod order;
pub mod price;
pub mod product;
pub mod status;
pub mod user;

pub use cart::CartItem;
pub use category::Category;
pub use email::{Email, EmailError};
pub use id::*;
pub use order::{CustomerInfo, ITBIS_RATE, Order, OrderTotals};
pub use price::{Price, PriceError};
pub use product::Product;
pub use status::OrderStatus;
pub use user::{NewUser, User};
