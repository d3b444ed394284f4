//! Key layout for the persisted state.
//!
//! Global keys hold the catalog, the registered-users list, the active
//! session user, and the global order log. Per-user keys (suffixed by user
//! id) hold that user's cart, favorites, orders, and notifications; reviews
//! are keyed per product. Everything shares one configurable namespace
//! prefix so several storefront instances can coexist in one store.

use vitrina_core::{ProductId, UserId};

/// Key prefixes whose entries are disposable and may be pruned when the
/// store runs out of quota.
pub const DISPOSABLE_PREFIXES: [&str; 2] = ["temp_", "cache_"];

/// The storefront's key namespace.
#[derive(Debug, Clone)]
pub struct KeySpace {
    prefix: String,
}

impl KeySpace {
    /// Create a keyspace with the given namespace prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The catalog array.
    #[must_use]
    pub fn products(&self) -> String {
        format!("{}products", self.prefix)
    }

    /// The registered-users list.
    #[must_use]
    pub fn users(&self) -> String {
        format!("{}users", self.prefix)
    }

    /// The currently logged-in user.
    #[must_use]
    pub fn session(&self) -> String {
        format!("{}user", self.prefix)
    }

    /// The global append-only order log (admin view).
    #[must_use]
    pub fn order_log(&self) -> String {
        format!("{}all_orders", self.prefix)
    }

    /// A user's cart.
    #[must_use]
    pub fn cart(&self, user: &UserId) -> String {
        format!("{}cart_{user}", self.prefix)
    }

    /// A user's favorite product ids.
    #[must_use]
    pub fn favorites(&self, user: &UserId) -> String {
        format!("{}favorites_{user}", self.prefix)
    }

    /// A user's own order history.
    #[must_use]
    pub fn orders(&self, user: &UserId) -> String {
        format!("{}orders_{user}", self.prefix)
    }

    /// A user's notification list.
    #[must_use]
    pub fn notifications(&self, user: &UserId) -> String {
        format!("{}notifications_{user}", self.prefix)
    }

    /// A product's review list.
    #[must_use]
    pub fn reviews(&self, product: &ProductId) -> String {
        format!("{}reviews_{product}", self.prefix)
    }
}

impl Default for KeySpace {
    fn default() -> Self {
        Self::new("vitrina_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_layout() {
        let keys = KeySpace::default();
        let user = UserId::new("1717171717171");

        assert_eq!(keys.products(), "vitrina_products");
        assert_eq!(keys.order_log(), "vitrina_all_orders");
        assert_eq!(keys.cart(&user), "vitrina_cart_1717171717171");
        assert_eq!(keys.favorites(&user), "vitrina_favorites_1717171717171");
        assert_eq!(
            keys.reviews(&ProductId::new("p1")),
            "vitrina_reviews_p1"
        );
    }

    #[test]
    fn test_custom_prefix() {
        let keys = KeySpace::new("shop_");
        assert_eq!(keys.users(), "shop_users");
        assert_eq!(keys.session(), "shop_user");
    }
}
