//! Get Invoice Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tillpoint_app::domain::invoices::models::{CompanyDetails, Invoice};

use crate::{
    extensions::*, invoices::errors::into_status_error, money, sales::get::SaleResponse,
    state::State,
};

/// Invoice Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InvoiceResponse {
    pub invoice_number: String,
    pub sale: SaleResponse,
    pub issue_date: String,
    pub due_date: String,

    /// Backed out of the sale's tax-inclusive total
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,

    pub company: CompanyResponse,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        Self {
            invoice_number: invoice.number,
            sale: invoice.sale.into(),
            issue_date: invoice.issue_date.to_string(),
            due_date: invoice.due_date.to_string(),
            subtotal: money::to_number(invoice.totals.subtotal),
            tax: money::to_number(invoice.totals.tax),
            total: money::to_number(invoice.totals.total),
            company: invoice.company.into(),
        }
    }
}

/// Company Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CompanyResponse {
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub email: String,
}

impl From<CompanyDetails> for CompanyResponse {
    fn from(company: CompanyDetails) -> Self {
        Self {
            name: company.name,
            address: company.address,
            city: company.city,
            phone: company.phone,
            email: company.email,
        }
    }
}

/// Get Invoice Handler
///
/// Renders the invoice for a recorded sale. Nothing is stored; the invoice is derived on every
/// request.
#[endpoint(
    tags("invoices"),
    summary = "Get Invoice",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Invoice"),
        (status_code = StatusCode::NOT_FOUND, description = "Sale not found"),
    ),
)]
pub(crate) async fn handler(
    sale: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<InvoiceResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let invoice = state
        .app
        .invoices
        .get_invoice(sale.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(invoice.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tillpoint_app::{
        domain::{
            invoices::{InvoicesServiceError, MockInvoicesService, models::invoice_number},
            sales::records::SaleUuid,
        },
        pricing::CheckoutTotals,
    };

    use crate::test_helpers::{invoices_service, make_sale};

    use super::*;

    fn make_service(repo: MockInvoicesService) -> Service {
        invoices_service(repo, Router::with_path("invoices/{sale}").get(handler))
    }

    fn make_invoice(uuid: SaleUuid) -> TestResult<Invoice> {
        Ok(Invoice {
            number: invoice_number(uuid),
            sale: make_sale(uuid),
            issue_date: Timestamp::UNIX_EPOCH,
            due_date: "1970-01-31T00:00:00Z".parse()?,
            totals: CheckoutTotals {
                subtotal: Decimal::new(2_000, 2),
                tax: Decimal::new(160, 2),
                total: Decimal::new(2_160, 2),
            },
            company: CompanyDetails {
                name: "Tillpoint Store".to_owned(),
                address: "1 Market Street".to_owned(),
                city: "Springfield".to_owned(),
                phone: "555-0100".to_owned(),
                email: "billing@example.com".to_owned(),
            },
        })
    }

    #[tokio::test]
    async fn test_get_invoice_success() -> TestResult {
        let uuid = SaleUuid::new();
        let invoice = make_invoice(uuid)?;

        let mut repo = MockInvoicesService::new();

        repo.expect_get_invoice()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(invoice));

        let mut res = TestClient::get(format!("http://example.com/invoices/{uuid}"))
            .send(&make_service(repo))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["invoiceNumber"], invoice_number(uuid));
        assert_eq!(body["subtotal"], 20.0);
        assert_eq!(body["tax"], 1.6);
        assert_eq!(body["dueDate"], "1970-01-31T00:00:00Z");
        assert_eq!(body["company"]["city"], "Springfield");
        assert_eq!(body["sale"]["customerName"], "Ada");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_invoice_for_unknown_sale_returns_404() -> TestResult {
        let mut repo = MockInvoicesService::new();

        repo.expect_get_invoice()
            .once()
            .return_once(|_| Err(InvoicesServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/invoices/{}", SaleUuid::new()))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
