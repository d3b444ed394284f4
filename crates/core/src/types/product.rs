//! Product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::id::ProductId;
use super::price::Price;

/// A purchasable product, persisted as part of the catalog array.
///
/// Field names serialize camelCase to match the stored catalog JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in Dominican pesos.
    pub price: Price,
    /// Image reference (URL or inline data).
    pub image: String,
    /// One of the four fixed categories.
    pub category: Category,
    /// Short description shown on cards and in search.
    pub description: String,
    /// Whether the product can currently be purchased.
    pub in_stock: bool,
    /// Highlighted on the home page. Absent in older catalog entries.
    #[serde(default)]
    pub featured: bool,
    /// Brand name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Average rating (0-5). Absent until reviews accumulate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Decimal>,
}

impl Product {
    /// Brand as a comparable string; products without a brand sort and match
    /// as the empty string.
    #[must_use]
    pub fn brand_str(&self) -> &str {
        self.brand.as_deref().unwrap_or("")
    }
}
