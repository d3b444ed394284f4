//! The main storefront flow: register, browse, fill a cart, place an order.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use vitrina_core::{Email, ITBIS_RATE, NewUser};
use vitrina_integration_tests::TestContext;
use vitrina_storefront::query::{ProductQuery, SortBy, search_products};
use vitrina_storefront::session::{ADMIN_EMAIL, ADMIN_PASSWORD};

fn shopper(email: &str) -> NewUser {
    NewUser {
        name: "Ana García".to_owned(),
        email: Email::parse(email).unwrap(),
        phone: "+1 (809) 555-9999".to_owned(),
        address: "Santiago de los Caballeros".to_owned(),
        avatar: None,
    }
}

#[test]
fn test_register_browse_order_flow() {
    let ctx = TestContext::new();

    // registering logs the shopper in
    let user = ctx.session.register(shopper("ana@example.com")).unwrap();
    ctx.sync_state_to_session();

    // browse the seeded catalog, cheapest first
    let catalog = ctx.catalog.products();
    let query = ProductQuery::default().sorted_by(SortBy::PriceLowToHigh);
    let browsing = search_products(&catalog, &query);
    assert!(!browsing.is_empty());

    // two of the cheapest product, one of the next
    let cheapest = browsing.first().unwrap().clone();
    let second = browsing.get(1).unwrap().clone();
    ctx.state.add_to_cart(cheapest.clone(), 2);
    ctx.state.add_to_cart(second.clone(), 1);
    assert_eq!(ctx.state.cart_count(), 3);

    // place the order
    let draft = ctx.draft_for(&user);
    let expected_subtotal = cheapest.price.times(2) + second.price.times(1);
    assert_eq!(draft.subtotal, expected_subtotal);
    assert_eq!(draft.total, draft.subtotal + draft.subtotal * ITBIS_RATE);

    let order_id = ctx.state.place_order(draft);

    // cart is emptied, both order copies exist
    assert!(ctx.state.cart().is_empty());
    assert_eq!(ctx.state.orders().len(), 1);
    let log = ctx.state.order_log();
    assert_eq!(log.len(), 1);
    assert_eq!(log.first().unwrap().id, order_id);
    assert_eq!(log.first().unwrap().user_id, user.id);
}

#[test]
fn test_cart_survives_logout_and_login() {
    let ctx = TestContext::new();
    ctx.session.register(shopper("ana@example.com")).unwrap();
    ctx.sync_state_to_session();

    let product = ctx.catalog.products().into_iter().next().unwrap();
    ctx.state.add_to_cart(product.clone(), 2);
    ctx.state.toggle_favorite(product.id.clone());

    // logging out resets the in-memory collections
    ctx.session.logout();
    ctx.sync_state_to_session();
    assert!(ctx.state.cart().is_empty());
    assert!(ctx.state.favorites().is_empty());

    // logging back in reloads them from the store (no password needed for
    // regular accounts)
    ctx.session.login("ana@example.com", "whatever").unwrap();
    ctx.sync_state_to_session();
    assert_eq!(ctx.state.cart().len(), 1);
    assert!(ctx.state.is_favorite(&product.id));
}

#[test]
fn test_two_shoppers_do_not_share_collections() {
    let ctx = TestContext::new();

    ctx.session.register(shopper("ana@example.com")).unwrap();
    ctx.sync_state_to_session();
    let product = ctx.catalog.products().into_iter().next().unwrap();
    ctx.state.add_to_cart(product, 1);

    ctx.session.logout();
    ctx.session.register(shopper("luis@example.com")).unwrap();
    ctx.sync_state_to_session();

    assert!(ctx.state.cart().is_empty());
}

#[test]
fn test_admin_login_gates_on_the_fixed_password() {
    let ctx = TestContext::new();

    assert!(ctx.session.login(ADMIN_EMAIL, "wrong").is_err());
    assert!(ctx.session.current_user().is_none());

    let admin = ctx.session.login(ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
    assert!(admin.is_admin);
}

#[test]
fn test_session_restores_after_reopen() {
    let ctx = TestContext::new();
    ctx.session.register(shopper("ana@example.com")).unwrap();

    // model closing and reopening the app over the same store
    let reopened = TestContext::with_store(ctx.store.clone());
    let restored = reopened.session.current_user().unwrap();
    assert_eq!(restored.email.as_str(), "ana@example.com");

    reopened.sync_state_to_session();
    assert!(reopened.state.cart().is_empty());
}

#[test]
fn test_order_totals_hold_the_itbis_invariant() {
    let ctx = TestContext::new();
    let user = ctx.session.register(shopper("ana@example.com")).unwrap();
    ctx.sync_state_to_session();

    for product in ctx.catalog.products().into_iter().take(4) {
        ctx.state.add_to_cart(product, 1);
    }
    ctx.state.place_order(ctx.draft_for(&user));

    let order = ctx.state.orders().into_iter().next().unwrap();
    assert_eq!(order.itbis, order.subtotal * Decimal::new(18, 2));
    assert_eq!(order.total, order.subtotal + order.itbis);
}
