//! Sales aggregation over the global order log.
//!
//! All functions are pure over `(orders, window, now)` so the dashboard can
//! be recomputed from any snapshot of the log.
//!
//! One inherited quirk is preserved on purpose: the monthly revenue series is
//! computed over the **full** log while the summary cards honor the selected
//! time window. Callers see the inconsistency at this one seam instead of it
//! being hidden inside the store.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Days, Utc};
use rust_decimal::Decimal;

use vitrina_core::{Order, Product, ProductId, UserId};

/// How many products the top-sellers list holds.
const TOP_PRODUCTS: usize = 5;

/// How many orders the recent-orders list holds.
const RECENT_ORDERS: usize = 10;

/// How many month buckets the revenue series holds.
const REVENUE_MONTHS: usize = 6;

/// Spanish month abbreviations for series labels.
const MONTH_ABBREV: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Time window for the dashboard summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    Today,
    Days7,
    Days30,
    #[default]
    All,
}

impl TimeWindow {
    /// The inclusive lower bound for `now`, or `None` for no bound.
    #[must_use]
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Today => now
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .map(|start| start.and_utc()),
            Self::Days7 => now.checked_sub_days(Days::new(7)),
            Self::Days30 => now.checked_sub_days(Days::new(30)),
            Self::All => None,
        }
    }

    /// Whether an order falls inside the window.
    #[must_use]
    pub fn contains(self, order: &Order, now: DateTime<Utc>) -> bool {
        self.cutoff(now)
            .is_none_or(|cutoff| order.created_at >= cutoff)
    }
}

impl std::str::FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Days7),
            "month" => Ok(Self::Days30),
            "all" => Ok(Self::All),
            _ => Err(format!("invalid time window: {s}")),
        }
    }
}

/// Sales accumulated for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSales {
    /// Product snapshot from the first order line seen.
    pub product: Product,
    /// Total units sold.
    pub quantity: u32,
    /// Revenue accumulated from those units.
    pub revenue: Decimal,
}

/// One bucket of the monthly revenue series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyRevenue {
    /// Display label, e.g. `"jun 2024"`.
    pub month: String,
    /// Revenue summed over that calendar month.
    pub revenue: Decimal,
}

/// Everything the dashboard shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    /// Orders inside the window.
    pub total_orders: usize,
    /// Revenue summed over the window.
    pub total_revenue: Decimal,
    /// Distinct customers inside the window.
    pub total_customers: usize,
    /// `total_revenue / total_orders`, zero when there are no orders.
    pub average_order_value: Decimal,
    /// Top sellers by unit quantity inside the window.
    pub top_products: Vec<ProductSales>,
    /// Most recent orders across the whole log, newest first.
    pub recent_orders: Vec<Order>,
    /// Monthly revenue over the whole log, oldest of the kept buckets first.
    pub monthly_revenue: Vec<MonthlyRevenue>,
}

/// Compute the full dashboard for one window.
#[must_use]
pub fn dashboard_stats(orders: &[Order], window: TimeWindow, now: DateTime<Utc>) -> DashboardStats {
    let windowed: Vec<&Order> = orders
        .iter()
        .filter(|order| window.contains(order, now))
        .collect();

    let total_orders = windowed.len();
    let total_revenue: Decimal = windowed.iter().map(|order| order.total).sum();
    let total_customers = distinct_customers(&windowed);
    let average_order_value = if total_orders == 0 {
        Decimal::ZERO
    } else {
        total_revenue / Decimal::from(total_orders)
    };

    DashboardStats {
        total_orders,
        total_revenue,
        total_customers,
        average_order_value,
        top_products: top_products(&windowed),
        recent_orders: recent_orders(orders),
        monthly_revenue: monthly_revenue(orders),
    }
}

fn distinct_customers(orders: &[&Order]) -> usize {
    let mut seen: Vec<&UserId> = orders.iter().map(|order| &order.user_id).collect();
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}

/// Group order lines by product id and rank by quantity sold.
fn top_products(orders: &[&Order]) -> Vec<ProductSales> {
    let mut sales: HashMap<ProductId, ProductSales> = HashMap::new();

    for order in orders {
        for item in &order.items {
            let line_revenue = item.line_total();
            sales
                .entry(item.product.id.clone())
                .and_modify(|entry| {
                    entry.quantity += item.quantity;
                    entry.revenue += line_revenue;
                })
                .or_insert_with(|| ProductSales {
                    product: item.product.clone(),
                    quantity: item.quantity,
                    revenue: line_revenue,
                });
        }
    }

    let mut ranked: Vec<ProductSales> = sales.into_values().collect();
    ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    ranked.truncate(TOP_PRODUCTS);
    ranked
}

/// Newest orders across the whole log, independent of the time window.
fn recent_orders(orders: &[Order]) -> Vec<Order> {
    let mut all: Vec<Order> = orders.to_vec();
    all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    all.truncate(RECENT_ORDERS);
    all
}

/// Revenue per calendar month over the whole log, truncated to the most
/// recent buckets.
fn monthly_revenue(orders: &[Order]) -> Vec<MonthlyRevenue> {
    let mut buckets: HashMap<(i32, u32), Decimal> = HashMap::new();
    for order in orders {
        let key = (order.created_at.year(), order.created_at.month());
        *buckets.entry(key).or_default() += order.total;
    }

    let mut keyed: Vec<((i32, u32), Decimal)> = buckets.into_iter().collect();
    keyed.sort_unstable_by_key(|(key, _)| *key);

    let skip = keyed.len().saturating_sub(REVENUE_MONTHS);
    keyed
        .into_iter()
        .skip(skip)
        .map(|((year, month), revenue)| MonthlyRevenue {
            month: month_label(year, month),
            revenue,
        })
        .collect()
}

fn month_label(year: i32, month: u32) -> String {
    let name = MONTH_ABBREV
        .get(month.saturating_sub(1) as usize)
        .unwrap_or(&"?");
    format!("{name} {year}")
}
