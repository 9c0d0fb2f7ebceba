//! Reports Errors

use salvo::http::StatusError;
use tracing::error;

use tillpoint_app::domain::reports::{ReportsServiceError, period::UnknownPeriodError};

pub(crate) fn into_status_error(error: ReportsServiceError) -> StatusError {
    match error {
        ReportsServiceError::Window(source) => {
            error!("failed to compute report window: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn invalid_period(error: UnknownPeriodError) -> StatusError {
    StatusError::bad_request()
        .brief("Invalid period")
        .detail(error.to_string())
}
