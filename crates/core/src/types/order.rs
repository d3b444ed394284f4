//! Order records and total arithmetic.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::CartItem;
use super::id::{OrderId, UserId};
use super::status::OrderStatus;

/// ITBIS (Dominican value-added tax), fixed at 18%.
pub const ITBIS_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Customer contact snapshot captured at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
}

/// Subtotal / tax / total triple for a cart.
///
/// Maintains `itbis = subtotal * ITBIS_RATE` and `total = subtotal + itbis`
/// exactly, in decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub itbis: Decimal,
    pub total: Decimal,
}

impl OrderTotals {
    /// Compute totals for a set of cart lines.
    #[must_use]
    pub fn from_items(items: &[CartItem]) -> Self {
        let subtotal: Decimal = items.iter().map(CartItem::line_total).sum();
        Self::from_subtotal(subtotal)
    }

    /// Compute totals from a known subtotal.
    #[must_use]
    pub fn from_subtotal(subtotal: Decimal) -> Self {
        let itbis = subtotal * ITBIS_RATE;
        Self {
            subtotal,
            itbis,
            total: subtotal + itbis,
        }
    }
}

/// An immutable record of a placed order.
///
/// Stored twice: in the owning user's order list and in the global order log
/// read by the admin dashboard. The two copies are independent projections of
/// the same write and are not reconciled afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Timestamp-derived ID; unique only up to clock resolution.
    pub id: OrderId,
    /// Owning user.
    pub user_id: UserId,
    /// Cart snapshot at purchase time.
    pub items: Vec<CartItem>,
    /// Sum of line totals.
    pub subtotal: Decimal,
    /// `subtotal * 0.18`.
    pub itbis: Decimal,
    /// `subtotal + itbis`.
    pub total: Decimal,
    /// Customer contact snapshot.
    pub customer_info: CustomerInfo,
    /// Free-form payment method label (e.g. "efectivo").
    pub payment_method: String,
    /// Lifecycle status; new orders start pending.
    pub status: OrderStatus,
    /// Placement timestamp.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Category, Price, Product, ProductId};

    fn item(price: u32, quantity: u32) -> CartItem {
        CartItem {
            product: Product {
                id: ProductId::new(format!("p{price}")),
                name: "x".to_owned(),
                price: Price::from_pesos(price),
                image: String::new(),
                category: Category::Perfumes,
                description: String::new(),
                in_stock: true,
                featured: false,
                brand: None,
                rating: None,
            },
            quantity,
        }
    }

    #[test]
    fn test_itbis_rate_is_18_percent() {
        assert_eq!(ITBIS_RATE, Decimal::new(18, 2));
    }

    #[test]
    fn test_totals_invariant() {
        let totals = OrderTotals::from_items(&[item(100, 1), item(200, 2)]);
        assert_eq!(totals.subtotal, Decimal::from(500));
        assert_eq!(totals.itbis, Decimal::from(90));
        assert_eq!(totals.total, Decimal::from(590));
        assert_eq!(totals.total, totals.subtotal + totals.itbis);
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let totals = OrderTotals::from_items(&[]);
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order {
            id: OrderId::new("1717171717171"),
            user_id: UserId::new("u1"),
            items: vec![item(100, 1)],
            subtotal: Decimal::from(100),
            itbis: Decimal::from(18),
            total: Decimal::from(118),
            customer_info: CustomerInfo {
                name: "Ana".to_owned(),
                phone: "809".to_owned(),
                address: "SD".to_owned(),
                email: "ana@example.com".to_owned(),
            },
            payment_method: "efectivo".to_owned(),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("customerInfo").is_some());
        assert!(json.get("paymentMethod").is_some());
    }
}
