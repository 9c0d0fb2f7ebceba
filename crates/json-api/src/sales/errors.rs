//! Sales Errors

use salvo::http::StatusError;

use tillpoint_app::domain::sales::SalesServiceError;

pub(crate) fn into_status_error(error: SalesServiceError) -> StatusError {
    match error {
        SalesServiceError::AlreadyExists => StatusError::conflict().brief("Sale already exists"),
        SalesServiceError::NotFound => StatusError::not_found(),
        SalesServiceError::NoItems => StatusError::bad_request().brief("Sale has no items"),
        SalesServiceError::Pricing(source) => {
            StatusError::bad_request().brief(format!("Invalid sale payload: {source}"))
        }
    }
}
