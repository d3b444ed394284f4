//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::Product;

/// One line of a cart: a product snapshot and a quantity.
///
/// A cart holds at most one line per distinct product ID; quantities below 1
/// remove the line (enforced by the state manager).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Snapshot of the product at the time it was added.
    pub product: Product,
    /// Units of the product. Always >= 1 inside a cart.
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line (`unit price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.times(self.quantity)
    }
}
