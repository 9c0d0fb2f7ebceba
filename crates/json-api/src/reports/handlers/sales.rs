//! Sales Report Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tillpoint_app::domain::reports::{
    aggregation::{ReportBucket, ReportSummary, SalesReport},
    period::ReportPeriod,
};

use crate::{
    extensions::*,
    money, observability,
    reports::errors::{into_status_error, invalid_period},
    state::State,
};

/// Sales Report Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SalesReportResponse {
    pub period: String,

    /// One point per bucket, oldest first
    pub chart_data: Vec<ChartPointResponse>,

    pub summary: ReportSummaryResponse,
}

impl From<SalesReport> for SalesReportResponse {
    fn from(report: SalesReport) -> Self {
        Self {
            period: report.period.to_string(),
            chart_data: report.buckets.into_iter().map(Into::into).collect(),
            summary: report.summary.into(),
        }
    }
}

/// Chart Point Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ChartPointResponse {
    /// Bucket key: `YYYY-MM-DD`, the Sunday starting the week, `YYYY-MM` or `YYYY`
    pub period: String,

    /// Number of sales in the bucket
    pub sales: u64,

    pub revenue: f64,
}

impl From<ReportBucket> for ChartPointResponse {
    fn from(bucket: ReportBucket) -> Self {
        Self {
            period: bucket.period_key,
            sales: bucket.sales_count,
            revenue: money::to_number(bucket.revenue),
        }
    }
}

/// Report Summary Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReportSummaryResponse {
    pub total_sales: u64,
    pub total_revenue: f64,

    /// Zero when there were no sales
    pub average_order_value: f64,
}

impl From<ReportSummary> for ReportSummaryResponse {
    fn from(summary: ReportSummary) -> Self {
        Self {
            total_sales: summary.total_sales,
            total_revenue: money::to_number(summary.total_revenue),
            average_order_value: money::to_number(summary.average_order_value),
        }
    }
}

/// Sales Report Handler
///
/// Buckets the sales inside the period's lookback window. `at` replaces the current time so a
/// report can be reproduced.
#[endpoint(
    tags("reports"),
    summary = "Sales Report",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Chart data and summary"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid period or timestamp"),
    ),
)]
pub(crate) async fn handler(
    period: QueryParam<String, false>,
    at: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<SalesReportResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let period = period
        .into_inner()
        .filter(|period| !period.trim().is_empty())
        .map(|period| period.parse::<ReportPeriod>())
        .transpose()
        .map_err(invalid_period)?
        .unwrap_or_default();

    let point_in_time = at.into_point_in_time()?;

    let report = state
        .app
        .reports
        .sales_report(period, point_in_time)
        .await
        .map_err(into_status_error)?;

    observability::record_report(period);

    Ok(Json(report.into()))
}
