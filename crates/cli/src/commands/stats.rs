//! Print dashboard stats from the order log.

use std::path::Path;

use chrono::Utc;

use vitrina_admin::dashboard::{TimeWindow, dashboard_stats};
use vitrina_core::Order;

use super::open_store;

/// Print the dashboard aggregation for one time window.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn run(store_path: &Path, window: TimeWindow) -> Result<(), Box<dyn std::error::Error>> {
    let (store, keys) = open_store(store_path)?;
    let orders: Vec<Order> = store.get_json(&keys.order_log()).unwrap_or_default();

    let stats = dashboard_stats(&orders, window, Utc::now());

    println!("Orders:          {}", stats.total_orders);
    println!("Revenue:         RD${:.2}", stats.total_revenue);
    println!("Customers:       {}", stats.total_customers);
    println!("Avg order value: RD${:.2}", stats.average_order_value);

    if !stats.top_products.is_empty() {
        println!("\nTop products:");
        for sales in &stats.top_products {
            println!(
                "  {:<40} {:>4} sold  RD${:.2}",
                sales.product.name, sales.quantity, sales.revenue
            );
        }
    }

    if !stats.monthly_revenue.is_empty() {
        println!("\nMonthly revenue:");
        for bucket in &stats.monthly_revenue {
            println!("  {:<10} RD${:.2}", bucket.month, bucket.revenue);
        }
    }

    if !stats.recent_orders.is_empty() {
        println!("\nRecent orders:");
        for order in &stats.recent_orders {
            println!(
                "  {}  {}  {}  RD${:.2}",
                order.id,
                order.created_at.format("%Y-%m-%d %H:%M"),
                order.status,
                order.total
            );
        }
    }

    Ok(())
}
