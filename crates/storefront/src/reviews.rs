//! Per-product review lists (peripheral surface).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use vitrina_core::{ProductId, ReviewId, UserId};

use crate::store::{KeySpace, SharedStore};

/// A customer review of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub user_name: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Reads and writes each product's review list.
#[derive(Clone)]
pub struct Reviews {
    store: SharedStore,
    keys: KeySpace,
}

impl Reviews {
    pub const fn new(store: SharedStore, keys: KeySpace) -> Self {
        Self { store, keys }
    }

    /// Reviews for a product, oldest first. Unreadable lists read as empty.
    #[must_use]
    pub fn list(&self, product: &ProductId) -> Vec<Review> {
        self.store
            .get_json(&self.keys.reviews(product))
            .unwrap_or_default()
    }

    /// Append a review. The rating clamps to 1..=5.
    pub fn add(
        &self,
        product: &ProductId,
        user_id: UserId,
        user_name: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
    ) -> Review {
        let now = Utc::now();
        let review = Review {
            id: ReviewId::from_timestamp(now),
            product_id: product.clone(),
            user_id,
            user_name: user_name.into(),
            rating: rating.clamp(1, 5),
            comment: comment.into(),
            created_at: now,
        };

        let mut list = self.list(product);
        list.push(review.clone());
        if let Err(error) = self.store.set_json(&self.keys.reviews(product), &list) {
            warn!(product = %product, %error, "could not persist review");
        }
        review
    }

    /// Average star rating, if the product has any reviews.
    #[must_use]
    pub fn average_rating(&self, product: &ProductId) -> Option<Decimal> {
        let list = self.list(product);
        if list.is_empty() {
            return None;
        }
        let sum: u32 = list.iter().map(|r| u32::from(r.rating)).sum();
        Some(Decimal::from(sum) / Decimal::from(list.len()))
    }
}
