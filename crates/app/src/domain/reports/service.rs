//! Reports service.

use async_trait::async_trait;
use jiff::{Timestamp, tz::TimeZone};
use mockall::automock;
use tracing::Span;

use crate::{
    domain::{
        inventory::repository::InventoryRepository,
        reports::{
            aggregation::{ReportWindow, SalesReport, aggregate},
            dashboard::{DashboardSummary, summarize_dashboard, today_window},
            errors::ReportsServiceError,
            period::ReportPeriod,
        },
        sales::repository::SalesRepository,
    },
    store::Store,
};

#[derive(Debug, Clone)]
pub struct MemoryReportsService {
    store: Store,
    sales_repository: SalesRepository,
    inventory_repository: InventoryRepository,
    time_zone: TimeZone,
}

impl MemoryReportsService {
    #[must_use]
    pub fn new(store: Store, time_zone: TimeZone) -> Self {
        Self {
            store,
            sales_repository: SalesRepository::new(),
            inventory_repository: InventoryRepository::new(),
            time_zone,
        }
    }
}

#[async_trait]
impl ReportsService for MemoryReportsService {
    #[tracing::instrument(
        name = "reports.service.sales_report",
        skip(self),
        fields(
            period = %period,
            point_in_time = %point_in_time,
            bucket_count = tracing::field::Empty,
            total_sales = tracing::field::Empty
        ),
        err
    )]
    async fn sales_report(
        &self,
        period: ReportPeriod,
        point_in_time: Timestamp,
    ) -> Result<SalesReport, ReportsServiceError> {
        let now = point_in_time.to_zoned(self.time_zone.clone());

        let window = ReportWindow {
            start: period.cutoff(&now)?.timestamp(),
            end: point_in_time,
        };

        let report = {
            let tables = self.store.read().await;

            aggregate(
                self.sales_repository.all_sales(&tables),
                period,
                window,
                &self.time_zone,
            )
        };

        let span = Span::current();

        span.record("bucket_count", tracing::field::display(report.buckets.len()));
        span.record(
            "total_sales",
            tracing::field::display(report.summary.total_sales),
        );

        Ok(report)
    }

    async fn dashboard(
        &self,
        point_in_time: Timestamp,
    ) -> Result<DashboardSummary, ReportsServiceError> {
        let today = today_window(point_in_time, &self.time_zone)?;

        let tables = self.store.read().await;

        Ok(summarize_dashboard(
            self.inventory_repository.all_items(&tables),
            self.sales_repository.all_sales(&tables),
            today,
            &self.time_zone,
        ))
    }
}

#[automock]
#[async_trait]
pub trait ReportsService: Send + Sync {
    /// Chart series and summary for `period`, for a report run at `point_in_time`.
    async fn sales_report(
        &self,
        period: ReportPeriod,
        point_in_time: Timestamp,
    ) -> Result<SalesReport, ReportsServiceError>;

    /// Stock figures and the sales made so far on `point_in_time`'s calendar day.
    async fn dashboard(
        &self,
        point_in_time: Timestamp,
    ) -> Result<DashboardSummary, ReportsServiceError>;
}
