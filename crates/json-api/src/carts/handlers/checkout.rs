//! Checkout Cart Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use tillpoint_app::domain::{carts::data::CheckoutDetails, sales::records::SaleUuid};

use crate::{
    carts::errors::into_status_error,
    extensions::*,
    observability,
    sales::{create::customer, get::SaleResponse},
    state::State,
};

/// Checkout Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutRequest {
    /// Id for the resulting sale; one is generated when omitted
    #[serde(default)]
    pub sale_id: Option<Uuid>,

    #[serde(default)]
    pub customer_name: Option<String>,

    #[serde(default)]
    pub customer_email: Option<String>,

    #[serde(default)]
    pub customer_phone: Option<String>,
}

impl From<CheckoutRequest> for CheckoutDetails {
    fn from(request: CheckoutRequest) -> Self {
        CheckoutDetails {
            sale_uuid: request.sale_id.map_or_else(SaleUuid::new, Into::into),
            customer: customer(
                request.customer_name,
                request.customer_email,
                request.customer_phone,
            ),
        }
    }
}

/// Checkout Cart Handler
///
/// Turns the cart into a sale. Stock for every line is checked and decremented together; if any
/// line is short nothing changes.
#[endpoint(
    tags("carts"),
    summary = "Checkout Cart",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Sale recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart is empty"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::CONFLICT, description = "Insufficient stock"),
    ),
)]
#[tracing::instrument(
    name = "carts.checkout",
    skip(cart, json, depot, res),
    fields(cart_uuid = tracing::field::Empty, sale_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SaleResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = cart.into_inner();
    let details: CheckoutDetails = json.into_inner().into();

    let span = tracing::Span::current();

    span.record("cart_uuid", tracing::field::display(cart));
    span.record("sale_uuid", tracing::field::display(details.sale_uuid));

    let sale = state
        .app
        .carts
        .checkout(cart.into(), details)
        .await
        .map_err(into_status_error)?;

    observability::record_checkout();

    res.add_header(LOCATION, format!("/sales/{}", sale.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(total = %sale.total, "cart checked out");

    Ok(Json(sale.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use tillpoint_app::domain::{
        carts::{CartsServiceError, MockCartsService, records::CartUuid},
        inventory::records::InventoryItemUuid,
    };

    use crate::test_helpers::{carts_service, make_sale};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(
            repo,
            Router::with_path("carts/{cart}/checkout").post(handler),
        )
    }

    #[tokio::test]
    async fn test_checkout_success() -> TestResult {
        let cart = CartUuid::new();
        let sale = SaleUuid::new();

        let mut repo = MockCartsService::new();

        repo.expect_checkout()
            .once()
            .withf(move |c, details| {
                *c == cart
                    && details.sale_uuid == sale
                    && details.customer.name.as_deref() == Some("Ada")
                    && details.customer.phone.is_none()
            })
            .return_once(move |_, _| Ok(make_sale(sale)));

        let mut res = TestClient::post(format!("http://example.com/carts/{cart}/checkout"))
            .json(&json!({ "saleId": sale.into_uuid(), "customerName": "Ada", "customerPhone": "" }))
            .send(&make_service(repo))
            .await;

        let body: SaleResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/sales/{sale}").as_str()));
        assert_eq!(body.id, sale.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_returns_400() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_checkout()
            .once()
            .return_once(|_, _| Err(CartsServiceError::EmptyCart));

        let res = TestClient::post(format!(
            "http://example.com/carts/{}/checkout",
            CartUuid::new()
        ))
        .json(&json!({}))
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_insufficient_stock_returns_409() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_checkout().once().return_once(|_, _| {
            Err(CartsServiceError::InsufficientStock {
                item: InventoryItemUuid::new(),
                requested: 3,
                available: 1,
            })
        });

        let res = TestClient::post(format!(
            "http://example.com/carts/{}/checkout",
            CartUuid::new()
        ))
        .json(&json!({}))
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
