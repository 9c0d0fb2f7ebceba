//! Business Config

use clap::Args;
use jiff::tz::TimeZone;
use rust_decimal::Decimal;

use crate::config::ConfigError;

/// Tax, reporting and invoice settings.
#[derive(Debug, Args)]
pub struct BusinessConfig {
    /// Sales tax rate as a fraction (0.08 is 8%)
    #[arg(long, env = "TAX_RATE", default_value = "0.08")]
    pub tax_rate: Decimal,

    /// IANA time zone report buckets and "today" are computed in
    #[arg(long = "report-time-zone", env = "REPORT_TIME_ZONE", default_value = "UTC")]
    pub report_time_zone: String,

    /// Company name printed on invoices
    #[arg(long, env = "COMPANY_NAME", default_value = "Tillpoint Store")]
    pub company_name: String,

    /// Company street address printed on invoices
    #[arg(long, env = "COMPANY_ADDRESS", default_value = "123 Business Street")]
    pub company_address: String,

    /// Company city printed on invoices
    #[arg(long, env = "COMPANY_CITY", default_value = "City, State 12345")]
    pub company_city: String,

    /// Company phone number printed on invoices
    #[arg(long, env = "COMPANY_PHONE", default_value = "(555) 123-4567")]
    pub company_phone: String,

    /// Company email printed on invoices
    #[arg(long, env = "COMPANY_EMAIL", default_value = "info@tillpoint.example")]
    pub company_email: String,
}

impl BusinessConfig {
    /// Resolve the configured report time zone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TimeZone`] if the zone is not in the time zone database.
    pub fn time_zone(&self) -> Result<TimeZone, ConfigError> {
        let name = self.report_time_zone.trim();

        if name.eq_ignore_ascii_case("UTC") {
            return Ok(TimeZone::UTC);
        }

        TimeZone::get(name).map_err(|source| ConfigError::TimeZone {
            name: name.to_owned(),
            source,
        })
    }
}
