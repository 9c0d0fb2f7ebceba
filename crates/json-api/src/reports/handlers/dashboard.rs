//! Dashboard Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tillpoint_app::domain::reports::dashboard::DashboardSummary;

use crate::{
    extensions::*, inventory::get::InventoryItemResponse, money,
    reports::errors::into_status_error, sales::get::SaleResponse, state::State,
};

/// Dashboard Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DashboardResponse {
    /// Units in stock across every item
    pub total_stock: u64,

    pub item_count: u64,
    pub today_sales: u64,
    pub today_revenue: f64,
    pub average_order_value: f64,
    pub low_stock_count: usize,
    pub low_stock_items: Vec<InventoryItemResponse>,

    /// Today's latest sales, newest first
    pub recent_sales: Vec<SaleResponse>,
}

impl From<DashboardSummary> for DashboardResponse {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            total_stock: summary.total_stock,
            item_count: summary.item_count,
            today_sales: summary.today.total_sales,
            today_revenue: money::to_number(summary.today.total_revenue),
            average_order_value: money::to_number(summary.today.average_order_value),
            low_stock_count: summary.low_stock_items.len(),
            low_stock_items: summary.low_stock_items.into_iter().map(Into::into).collect(),
            recent_sales: summary.recent_sales.into_iter().map(Into::into).collect(),
        }
    }
}

/// Dashboard Handler
#[endpoint(
    tags("reports"),
    summary = "Dashboard",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Stock and today's sales"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid timestamp"),
    ),
)]
pub(crate) async fn handler(
    at: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<DashboardResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let point_in_time = at.into_point_in_time()?;

    let summary = state
        .app
        .reports
        .dashboard(point_in_time)
        .await
        .map_err(into_status_error)?;

    Ok(Json(summary.into()))
}
