//! Dashboard aggregation over orders placed through the storefront.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use chrono::Utc;
use rust_decimal::Decimal;

use vitrina_admin::dashboard::{TimeWindow, dashboard_stats};
use vitrina_core::{Email, NewUser};
use vitrina_integration_tests::TestContext;

fn shopper(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_owned(),
        email: Email::parse(email).unwrap(),
        phone: "809".to_owned(),
        address: "SD".to_owned(),
        avatar: None,
    }
}

/// Place one order of `quantity` units of catalog product `index`.
fn place_order(ctx: &TestContext, index: usize, quantity: u32) {
    let user = ctx.session.current_user().unwrap();
    let product = ctx.catalog.products().get(index).unwrap().clone();
    ctx.state.add_to_cart(product, quantity);
    ctx.state.place_order(ctx.draft_for(&user));
}

#[test]
fn test_dashboard_over_placed_orders() {
    let ctx = TestContext::new();

    // two shoppers, three orders
    ctx.session.register(shopper("Ana", "ana@example.com")).unwrap();
    ctx.sync_state_to_session();
    place_order(&ctx, 0, 2);
    place_order(&ctx, 1, 1);

    ctx.session.logout();
    ctx.session.register(shopper("Luis", "luis@example.com")).unwrap();
    ctx.sync_state_to_session();
    place_order(&ctx, 0, 3);

    let log = ctx.state.order_log();
    assert_eq!(log.len(), 3);

    let stats = dashboard_stats(&log, TimeWindow::All, Utc::now());
    assert_eq!(stats.total_orders, 3);
    assert_eq!(stats.total_customers, 2);

    let expected_revenue: Decimal = log.iter().map(|o| o.total).sum();
    assert_eq!(stats.total_revenue, expected_revenue);
    assert_eq!(
        stats.average_order_value,
        expected_revenue / Decimal::from(3)
    );

    // catalog product 0 sold 5 units across both shoppers
    let top = stats.top_products.first().unwrap();
    assert_eq!(top.quantity, 5);
    assert_eq!(
        top.product.id,
        ctx.catalog.products().first().unwrap().id
    );

    // recent orders are newest first
    assert_eq!(stats.recent_orders.len(), 3);
    assert!(
        stats
            .recent_orders
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at)
    );

    // everything this month landed in one revenue bucket
    assert_eq!(stats.monthly_revenue.len(), 1);
    assert_eq!(
        stats.monthly_revenue.first().unwrap().revenue,
        expected_revenue
    );
}

#[test]
fn test_fresh_store_has_an_empty_dashboard() {
    let ctx = TestContext::new();
    let stats = dashboard_stats(&ctx.state.order_log(), TimeWindow::All, Utc::now());
    assert_eq!(stats.total_orders, 0);
    assert_eq!(stats.total_revenue, Decimal::ZERO);
    assert_eq!(stats.average_order_value, Decimal::ZERO);
}

#[test]
fn test_user_history_and_global_log_agree_after_one_writer() {
    let ctx = TestContext::new();
    ctx.session.register(shopper("Ana", "ana@example.com")).unwrap();
    ctx.sync_state_to_session();
    place_order(&ctx, 2, 1);

    // both projections of the same write carry the same order
    let own = ctx.state.orders();
    let log = ctx.state.order_log();
    assert_eq!(own, log);
}
