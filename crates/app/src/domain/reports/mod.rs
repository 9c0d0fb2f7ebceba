//! Reports
//!
//! Sales reporting over the in-memory sale records: a lookback window and bucket key per
//! [`ReportPeriod`], folded into a sorted series plus summary statistics.

pub mod aggregation;
pub mod dashboard;
pub mod errors;
pub mod period;
pub mod service;

pub use errors::ReportsServiceError;
pub use service::*;
