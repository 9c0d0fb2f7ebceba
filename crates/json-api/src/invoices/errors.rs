//! Invoices Errors

use salvo::http::StatusError;
use tracing::error;

use tillpoint_app::domain::invoices::InvoicesServiceError;

pub(crate) fn into_status_error(error: InvoicesServiceError) -> StatusError {
    match error {
        InvoicesServiceError::NotFound => StatusError::not_found().brief("Sale not found"),
        InvoicesServiceError::Pricing(_) | InvoicesServiceError::DueDate(_) => {
            error!("failed to derive invoice: {error}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use tillpoint_app::pricing::PricingError;

    use super::*;

    #[test]
    fn missing_sale_is_not_found() {
        assert_eq!(
            into_status_error(InvoicesServiceError::NotFound).code,
            salvo::http::StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn pricing_failures_are_internal() {
        let error = InvoicesServiceError::Pricing(PricingError::Overflow);

        assert_eq!(
            into_status_error(error).code,
            salvo::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
