//! Dashboard summary

use jiff::{Timestamp, tz::TimeZone};

use crate::domain::{
    inventory::records::InventoryItemRecord,
    reports::{
        aggregation::{ReportSummary, ReportWindow, aggregate},
        period::ReportPeriod,
    },
    sales::records::SaleRecord,
};

/// How many of today's sales the dashboard lists.
pub const RECENT_SALES_LIMIT: usize = 5;

/// Stock and sales figures for the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    /// Units in stock across every item.
    pub total_stock: u64,

    pub item_count: u64,

    /// Sales since local midnight, in the report time zone.
    pub today: ReportSummary,

    /// Today's most recent sales, newest first.
    pub recent_sales: Vec<SaleRecord>,

    pub low_stock_items: Vec<InventoryItemRecord>,
}

/// Summarize `inventory` and the part of `sales` falling inside `today`.
pub fn summarize_dashboard(
    inventory: &[InventoryItemRecord],
    sales: &[SaleRecord],
    today: ReportWindow,
    time_zone: &TimeZone,
) -> DashboardSummary {
    let total_stock = inventory.iter().map(|item| u64::from(item.stock)).sum();

    let mut recent_sales: Vec<&SaleRecord> = sales
        .iter()
        .filter(|sale| today.contains(sale.created_at))
        .collect();

    recent_sales.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent_sales.truncate(RECENT_SALES_LIMIT);

    DashboardSummary {
        total_stock,
        item_count: u64::try_from(inventory.len()).unwrap_or(u64::MAX),
        today: aggregate(sales, ReportPeriod::Daily, today, time_zone).summary,
        recent_sales: recent_sales.into_iter().cloned().collect(),
        low_stock_items: inventory
            .iter()
            .filter(|item| item.is_low_stock())
            .cloned()
            .collect(),
    }
}

/// From local midnight to `now`.
///
/// # Errors
///
/// Returns an error if midnight cannot be represented in `time_zone`.
pub fn today_window(now: Timestamp, time_zone: &TimeZone) -> Result<ReportWindow, jiff::Error> {
    let start = now.to_zoned(time_zone.clone()).start_of_day()?.timestamp();

    Ok(ReportWindow { start, end: now })
}
