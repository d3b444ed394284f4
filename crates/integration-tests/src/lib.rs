//! End-to-end tests for Vitrina.
//!
//! Every test runs hermetically against an in-memory store; there is no
//! server to start and no external service to stub. [`TestContext`] wires the
//! storefront the way an embedding UI would: one shared store, one session
//! manager, one state manager, one catalog repository.
//!
//! # Test Categories
//!
//! - `storefront_flow` - register → login → cart → order
//! - `admin_dashboard` - aggregation over placed orders
//! - `catalog_persistence` - seeding, fallback, management, change
//!   notification

#![cfg_attr(not(test), forbid(unsafe_code))]

use vitrina_core::{CustomerInfo, OrderStatus, OrderTotals, User};
use vitrina_storefront::catalog::CatalogRepository;
use vitrina_storefront::session::SessionManager;
use vitrina_storefront::state::{OrderDraft, StateManager};
use vitrina_storefront::store::{KeySpace, MemoryStore, SharedStore};

/// A fully wired storefront over one in-memory store.
pub struct TestContext {
    pub store: SharedStore,
    pub keys: KeySpace,
    pub session: SessionManager,
    pub state: StateManager,
    pub catalog: CatalogRepository,
}

impl TestContext {
    /// Wire a fresh storefront over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(SharedStore::new(MemoryStore::new()))
    }

    /// Wire a storefront over an existing store (to model reopening the app
    /// against persisted data).
    #[must_use]
    pub fn with_store(store: SharedStore) -> Self {
        let keys = KeySpace::default();
        let session = SessionManager::new(store.clone(), keys.clone());
        let state = StateManager::new(store.clone(), keys.clone());
        let catalog = CatalogRepository::new(store.clone(), keys.products());

        Self {
            store,
            keys,
            session,
            state,
            catalog,
        }
    }

    /// Point the state manager at the session's current user, the way the
    /// UI reloads collections after login/logout.
    pub fn sync_state_to_session(&self) {
        let user = self.session.current_user();
        self.state.set_user(user.as_ref().map(|u| &u.id));
    }

    /// Build an order draft from the current cart for `user`.
    #[must_use]
    pub fn draft_for(&self, user: &User) -> OrderDraft {
        let items = self.state.cart();
        let totals = OrderTotals::from_items(&items);
        OrderDraft {
            user_id: user.id.clone(),
            items,
            subtotal: totals.subtotal,
            itbis: totals.itbis,
            total: totals.total,
            customer_info: CustomerInfo {
                name: user.name.clone(),
                phone: user.phone.clone(),
                address: user.address.clone(),
                email: user.email.as_str().to_owned(),
            },
            payment_method: "efectivo".to_owned(),
            status: OrderStatus::Pending,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
