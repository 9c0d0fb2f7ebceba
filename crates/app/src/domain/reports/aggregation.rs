//! Report aggregation
//!
//! Folds sales inside a [`ReportWindow`] into per-bucket tallies keyed by
//! [`ReportPeriod::bucket_key`]. Tallies are kept at full precision and only rounded when the
//! report is built, and the fold is order independent: the input is never assumed to be
//! sorted by time.

use std::collections::BTreeMap;

use jiff::{Timestamp, tz::TimeZone};
use rust_decimal::Decimal;

use crate::{
    domain::{reports::period::ReportPeriod, sales::records::SaleRecord},
    pricing::round_money,
};

/// Inclusive time range a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl ReportWindow {
    #[must_use]
    pub fn contains(&self, at: Timestamp) -> bool {
        self.start <= at && at <= self.end
    }
}

/// One point of the chart series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportBucket {
    pub period_key: String,
    pub sales_count: u64,

    /// Revenue in the bucket, rounded to cents.
    pub revenue: Decimal,
}

/// Totals over every sale in the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub total_sales: u64,
    pub total_revenue: Decimal,

    /// `total_revenue / total_sales`, or zero when there were no sales.
    pub average_order_value: Decimal,
}

/// Chart series and summary for one period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesReport {
    pub period: ReportPeriod,
    pub window: ReportWindow,

    /// Sorted by `period_key`.
    pub buckets: Vec<ReportBucket>,

    pub summary: ReportSummary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    count: u64,
    revenue: Decimal,
}

impl Tally {
    fn add(&mut self, sale: &SaleRecord) {
        self.count = self.count.saturating_add(1);
        self.revenue += sale.total;
    }
}

/// Build the report for `sales` falling inside `window`.
///
/// Bucket keys are derived from each sale's calendar date in `time_zone`.
pub fn aggregate<'a, I>(
    sales: I,
    period: ReportPeriod,
    window: ReportWindow,
    time_zone: &TimeZone,
) -> SalesReport
where
    I: IntoIterator<Item = &'a SaleRecord>,
{
    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();
    let mut overall = Tally::default();

    for sale in sales
        .into_iter()
        .filter(|sale| window.contains(sale.created_at))
    {
        let date = time_zone.to_datetime(sale.created_at).date();

        tallies.entry(period.bucket_key(date)).or_default().add(sale);
        overall.add(sale);
    }

    let buckets = tallies
        .into_iter()
        .map(|(period_key, tally)| ReportBucket {
            period_key,
            sales_count: tally.count,
            revenue: round_money(tally.revenue),
        })
        .collect();

    SalesReport {
        period,
        window,
        buckets,
        summary: summarize(overall),
    }
}

fn summarize(overall: Tally) -> ReportSummary {
    let total_revenue = round_money(overall.revenue);

    let average_order_value = if overall.count == 0 {
        Decimal::ZERO
    } else {
        round_money(total_revenue / Decimal::from(overall.count))
    };

    ReportSummary {
        total_sales: overall.count,
        total_revenue,
        average_order_value,
    }
}
