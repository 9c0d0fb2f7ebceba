//! Report Periods

use std::{fmt, str::FromStr};

use jiff::{ToSpan, Zoned, civil::Date};
use thiserror::Error;

/// Reporting granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportPeriod {
    /// Last 7 days, one bucket per day.
    #[default]
    Daily,

    /// Last 56 days, one bucket per Sunday-aligned week.
    Weekly,

    /// Last 12 months, one bucket per calendar month.
    Monthly,

    /// Last 3 years, one bucket per calendar year.
    Yearly,
}

/// A period name outside `daily`, `weekly`, `monthly` and `yearly`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown report period {0:?}: expected daily, weekly, monthly or yearly")]
pub struct UnknownPeriodError(pub String);

impl ReportPeriod {
    /// Every period, finest first.
    pub const ALL: [Self; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Earliest instant included in a report ending at `now`.
    ///
    /// Lookbacks use calendar arithmetic in `now`'s time zone, so a monthly report run on
    /// 31 March starts on 31 March of the previous year.
    ///
    /// # Errors
    ///
    /// Returns an error if the cutoff falls outside the supported date range.
    pub fn cutoff(self, now: &Zoned) -> Result<Zoned, jiff::Error> {
        match self {
            Self::Daily => now.checked_sub(7.days()),
            Self::Weekly => now.checked_sub(56.days()),
            Self::Monthly => now.checked_sub(12.months()),
            Self::Yearly => now.checked_sub(3.years()),
        }
    }

    /// Bucket label for a sale made on `date`.
    ///
    /// Every format is zero-padded, so sorting the labels as strings sorts them by time.
    #[must_use]
    pub fn bucket_key(self, date: Date) -> String {
        match self {
            Self::Daily => date.to_string(),
            Self::Weekly => {
                let since_sunday = i64::from(date.weekday().to_sunday_zero_offset());

                date.saturating_sub(since_sunday.days()).to_string()
            }
            Self::Monthly => format!("{:04}-{:02}", date.year(), date.month()),
            Self::Yearly => format!("{:04}", date.year()),
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportPeriod {
    type Err = UnknownPeriodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|period| period.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownPeriodError(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz::TimeZone};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_known_periods() -> TestResult {
        assert_eq!("daily".parse::<ReportPeriod>()?, ReportPeriod::Daily);
        assert_eq!("weekly".parse::<ReportPeriod>()?, ReportPeriod::Weekly);
        assert_eq!("Monthly".parse::<ReportPeriod>()?, ReportPeriod::Monthly);
        assert_eq!(" yearly ".parse::<ReportPeriod>()?, ReportPeriod::Yearly);

        Ok(())
    }

    #[test]
    fn rejects_unknown_periods() {
        for value in ["hourly", "", "day", "dailyy"] {
            assert_eq!(
                value.parse::<ReportPeriod>(),
                Err(UnknownPeriodError(value.to_string())),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn default_is_daily() {
        assert_eq!(ReportPeriod::default(), ReportPeriod::Daily);
    }

    #[test]
    fn cutoffs_use_fixed_lookbacks() -> TestResult {
        let now = date(2026, 3, 31).at(12, 0, 0, 0).to_zoned(TimeZone::UTC)?;

        let cutoff = |period: ReportPeriod| -> TestResult<Date> { Ok(period.cutoff(&now)?.date()) };

        assert_eq!(cutoff(ReportPeriod::Daily)?, date(2026, 3, 24));
        assert_eq!(cutoff(ReportPeriod::Weekly)?, date(2026, 2, 3));
        assert_eq!(cutoff(ReportPeriod::Monthly)?, date(2025, 3, 31));
        assert_eq!(cutoff(ReportPeriod::Yearly)?, date(2023, 3, 31));

        Ok(())
    }

    #[test]
    fn cutoff_keeps_time_of_day() -> TestResult {
        let now = date(2026, 3, 31).at(12, 15, 0, 0).to_zoned(TimeZone::UTC)?;

        let cutoff = ReportPeriod::Daily.cutoff(&now)?;

        assert_eq!(cutoff.time(), now.time());

        Ok(())
    }

    #[test]
    fn daily_key_is_iso_date() {
        assert_eq!(ReportPeriod::Daily.bucket_key(date(2026, 1, 5)), "2026-01-05");
    }

    #[test]
    fn weekly_key_is_preceding_sunday() {
        // 2026-10-14 is a Wednesday.
        assert_eq!(ReportPeriod::Weekly.bucket_key(date(2026, 10, 14)), "2026-10-11");
        assert_eq!(ReportPeriod::Weekly.bucket_key(date(2026, 10, 17)), "2026-10-11");
    }

    #[test]
    fn weekly_key_of_sunday_is_itself() {
        assert_eq!(ReportPeriod::Weekly.bucket_key(date(2026, 10, 18)), "2026-10-18");
    }

    #[test]
    fn weekly_key_crosses_month_and_year() {
        // 2026-01-01 is a Thursday.
        assert_eq!(ReportPeriod::Weekly.bucket_key(date(2026, 1, 1)), "2025-12-28");
    }

    #[test]
    fn monthly_and_yearly_keys_are_zero_padded() {
        assert_eq!(ReportPeriod::Monthly.bucket_key(date(2026, 3, 9)), "2026-03");
        assert_eq!(ReportPeriod::Yearly.bucket_key(date(987, 3, 9)), "0987");
    }

    #[test]
    fn monthly_keys_sort_chronologically() {
        let months: Vec<Date> = (0..12)
            .map(|offset: i64| date(2025, 5, 1).saturating_add(offset.months()))
            .collect();

        let keys: Vec<String> = months
            .iter()
            .map(|month| ReportPeriod::Monthly.bucket_key(*month))
            .collect();

        let mut sorted = keys.clone();
        sorted.sort();

        assert_eq!(keys, sorted, "lexicographic order should match calendar order");
        assert_eq!(keys.first().map(String::as_str), Some("2025-05"));
        assert_eq!(keys.last().map(String::as_str), Some("2026-04"));
    }
}
