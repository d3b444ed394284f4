//! Per-user cart, favorites, and order state.
//!
//! Collections are scoped to the logged-in user and persisted to the user's
//! namespaced keys on every mutation. Switching users reloads everything;
//! logging out resets to empty collections. Persist failures are logged and
//! abandoned, so in-memory state can run ahead of the store under quota
//! pressure — that is the accepted failure mode, not a bug to roll back.

use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};

use vitrina_core::{CartItem, CustomerInfo, Order, OrderId, OrderStatus, Product, ProductId, UserId};

use crate::store::{KeySpace, SharedStore};

/// Everything an order needs besides its id and timestamp, which are
/// assigned at placement.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub subtotal: Decimal,
    pub itbis: Decimal,
    pub total: Decimal,
    pub customer_info: CustomerInfo,
    pub payment_method: String,
    pub status: OrderStatus,
}

#[derive(Default)]
struct Collections {
    user_id: Option<UserId>,
    cart: Vec<CartItem>,
    favorites: Vec<ProductId>,
    orders: Vec<Order>,
}

/// Cart, favorites, and order history for the active user.
pub struct StateManager {
    store: SharedStore,
    keys: KeySpace,
    inner: RwLock<Collections>,
}

impl StateManager {
    /// Create a state manager with no active user and empty collections.
    #[must_use]
    pub fn new(store: SharedStore, keys: KeySpace) -> Self {
        Self {
            store,
            keys,
            inner: RwLock::new(Collections::default()),
        }
    }

    /// Switch the active user: load that user's collections from the store,
    /// or reset to empty collections when `None`. Unreadable collections
    /// load as empty.
    pub fn set_user(&self, user: Option<&UserId>) {
        let mut inner = self.write();
        match user {
            Some(id) => {
                inner.user_id = Some(id.clone());
                inner.cart = self.store.get_json(&self.keys.cart(id)).unwrap_or_default();
                inner.favorites = self
                    .store
                    .get_json(&self.keys.favorites(id))
                    .unwrap_or_default();
                inner.orders = self
                    .store
                    .get_json(&self.keys.orders(id))
                    .unwrap_or_default();
            }
            None => *inner = Collections::default(),
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Snapshot of the cart lines.
    #[must_use]
    pub fn cart(&self) -> Vec<CartItem> {
        self.read().cart.clone()
    }

    /// Total units across all cart lines.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.read().cart.iter().map(|item| item.quantity).sum()
    }

    /// Add `quantity` units of a product. An existing line for the same
    /// product id has its quantity incremented; otherwise a new line is
    /// appended. There is no upper bound on quantity.
    pub fn add_to_cart(&self, product: Product, quantity: u32) {
        let mut inner = self.write();
        if let Some(line) = inner.cart.iter_mut().find(|i| i.product.id == product.id) {
            line.quantity += quantity;
        } else {
            inner.cart.push(CartItem { product, quantity });
        }
        self.persist_cart(&inner);
    }

    /// Remove a line. Unknown product ids are a no-op.
    pub fn remove_from_cart(&self, product_id: &ProductId) {
        let mut inner = self.write();
        inner.cart.retain(|item| &item.product.id != product_id);
        self.persist_cart(&inner);
    }

    /// Set a line's quantity. Zero removes the line.
    pub fn update_cart_quantity(&self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_from_cart(product_id);
            return;
        }
        let mut inner = self.write();
        if let Some(line) = inner.cart.iter_mut().find(|i| &i.product.id == product_id) {
            line.quantity = quantity;
        }
        self.persist_cart(&inner);
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        let mut inner = self.write();
        inner.cart.clear();
        self.persist_cart(&inner);
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Snapshot of the favorite product ids.
    #[must_use]
    pub fn favorites(&self) -> Vec<ProductId> {
        self.read().favorites.clone()
    }

    /// Whether a product is currently a favorite.
    #[must_use]
    pub fn is_favorite(&self, product_id: &ProductId) -> bool {
        self.read().favorites.contains(product_id)
    }

    /// Add the product to favorites if absent, remove it if present.
    pub fn toggle_favorite(&self, product_id: ProductId) {
        let mut inner = self.write();
        if inner.favorites.contains(&product_id) {
            inner.favorites.retain(|id| id != &product_id);
        } else {
            inner.favorites.push(product_id);
        }
        self.persist_favorites(&inner);
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Snapshot of the user's order history.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.read().orders.clone()
    }

    /// Place an order: assign a fresh timestamp id, append to the user's
    /// order history and to the global order log, and clear the cart.
    ///
    /// The draft is taken as supplied — stock and prices are not re-checked
    /// against the live catalog at commit time. Persist failures are logged
    /// and do not undo the in-memory append.
    pub fn place_order(&self, draft: OrderDraft) -> OrderId {
        let now = Utc::now();
        let order = Order {
            id: OrderId::from_timestamp(now),
            user_id: draft.user_id,
            items: draft.items,
            subtotal: draft.subtotal,
            itbis: draft.itbis,
            total: draft.total,
            customer_info: draft.customer_info,
            payment_method: draft.payment_method,
            status: draft.status,
            created_at: now,
        };

        let mut inner = self.write();
        inner.orders.push(order.clone());
        self.persist_orders(&inner);

        self.append_to_order_log(&order);

        inner.cart.clear();
        self.persist_cart(&inner);

        info!(order = %order.id, total = %order.total, "order placed");
        order.id
    }

    /// The global order log, as readable. Unreadable or absent logs read as
    /// empty.
    #[must_use]
    pub fn order_log(&self) -> Vec<Order> {
        self.store
            .get_json(&self.keys.order_log())
            .unwrap_or_default()
    }

    fn append_to_order_log(&self, order: &Order) {
        let mut log = self.order_log();
        log.push(order.clone());
        if let Err(error) = self.store.set_json(&self.keys.order_log(), &log) {
            warn!(order = %order.id, %error, "could not append to the global order log");
        }
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn persist_cart(&self, inner: &Collections) {
        if let Some(id) = &inner.user_id
            && let Err(error) = self.store.set_json(&self.keys.cart(id), &inner.cart)
        {
            warn!(user = %id, %error, "could not persist cart");
        }
    }

    fn persist_favorites(&self, inner: &Collections) {
        if let Some(id) = &inner.user_id
            && let Err(error) = self
                .store
                .set_json(&self.keys.favorites(id), &inner.favorites)
        {
            warn!(user = %id, %error, "could not persist favorites");
        }
    }

    fn persist_orders(&self, inner: &Collections) {
        if let Some(id) = &inner.user_id
            && let Err(error) = self.store.set_json(&self.keys.orders(id), &inner.orders)
        {
            warn!(user = %id, %error, "could not persist order history");
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Collections> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Collections> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::store::MemoryStore;
    use vitrina_core::OrderTotals;

    fn state_with_user(user: &str) -> StateManager {
        let state = StateManager::new(SharedStore::new(MemoryStore::new()), KeySpace::default());
        state.set_user(Some(&UserId::new(user)));
        state
    }

    fn product(index: usize) -> Product {
        default_catalog().get(index).unwrap().clone()
    }

    fn draft_from_cart(state: &StateManager, user: &str) -> OrderDraft {
        let items = state.cart();
        let totals = OrderTotals::from_items(&items);
        OrderDraft {
            user_id: UserId::new(user),
            items,
            subtotal: totals.subtotal,
            itbis: totals.itbis,
            total: totals.total,
            customer_info: CustomerInfo {
                name: "Ana".to_owned(),
                phone: "809".to_owned(),
                address: "SD".to_owned(),
                email: "ana@example.com".to_owned(),
            },
            payment_method: "efectivo".to_owned(),
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn test_add_to_cart_merges_lines() {
        let state = state_with_user("u1");
        state.add_to_cart(product(0), 1);
        state.add_to_cart(product(0), 2);
        state.add_to_cart(product(1), 1);

        let cart = state.cart();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.first().unwrap().quantity, 3);
        assert_eq!(state.cart_count(), 4);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let state = state_with_user("u1");
        let p = product(0);
        state.add_to_cart(p.clone(), 2);

        state.update_cart_quantity(&p.id, 0);
        assert!(state.cart().is_empty());

        // removing a line that is not there is a no-op
        state.remove_from_cart(&ProductId::new("missing"));
        assert!(state.cart().is_empty());
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let state = state_with_user("u1");
        let p = product(0);
        state.add_to_cart(p.clone(), 2);
        state.update_cart_quantity(&p.id, 7);
        assert_eq!(state.cart().first().unwrap().quantity, 7);
    }

    #[test]
    fn test_toggle_favorite_is_involutive() {
        let state = state_with_user("u1");
        let id = ProductId::new("p1");

        state.toggle_favorite(id.clone());
        assert!(state.is_favorite(&id));

        state.toggle_favorite(id.clone());
        assert!(!state.is_favorite(&id));
        assert!(state.favorites().is_empty());
    }

    #[test]
    fn test_collections_are_scoped_per_user() {
        let store = SharedStore::new(MemoryStore::new());
        let state = StateManager::new(store, KeySpace::default());

        state.set_user(Some(&UserId::new("u1")));
        state.add_to_cart(product(0), 1);
        state.toggle_favorite(ProductId::new("p1"));

        // switching users loads the other user's (empty) collections
        state.set_user(Some(&UserId::new("u2")));
        assert!(state.cart().is_empty());
        assert!(state.favorites().is_empty());

        // switching back reloads the persisted collections
        state.set_user(Some(&UserId::new("u1")));
        assert_eq!(state.cart().len(), 1);
        assert!(state.is_favorite(&ProductId::new("p1")));

        // logging out resets everything
        state.set_user(None);
        assert!(state.cart().is_empty());
    }

    #[test]
    fn test_place_order_appends_both_copies_and_clears_cart() {
        let state = state_with_user("u1");
        state.add_to_cart(product(0), 2);

        let draft = draft_from_cart(&state, "u1");
        let expected_total = draft.total;
        let id = state.place_order(draft);

        assert!(state.cart().is_empty());

        let orders = state.orders();
        assert_eq!(orders.len(), 1);
        let order = orders.first().unwrap();
        assert_eq!(order.id, id);
        assert_eq!(order.total, expected_total);
        assert_eq!(order.total, order.subtotal + order.itbis);

        let log = state.order_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log.first().unwrap().id, id);
    }

    #[test]
    fn test_persist_failure_keeps_in_memory_state() {
        // budget enough for the initial writes but not for a large cart
        let store = SharedStore::new(MemoryStore::with_capacity(256));
        let state = StateManager::new(store, KeySpace::default());
        state.set_user(Some(&UserId::new("u1")));

        state.add_to_cart(product(0), 1);

        // memory has the line even though the store write was refused
        assert_eq!(state.cart().len(), 1);
        assert!(
            state
                .store
                .get_raw(&state.keys.cart(&UserId::new("u1")))
                .is_none()
        );
    }
}
