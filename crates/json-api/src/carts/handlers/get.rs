//! Get Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tillpoint_app::{
    domain::carts::{models::Cart, records::CartLineRecord},
    pricing::{PricedLine, round_money},
};

use crate::{carts::errors::into_status_error, extensions::*, money, state::State};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartResponse {
    pub id: Uuid,

    /// Lines in the order their items were first added
    pub lines: Vec<CartLineResponse>,

    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.uuid.into_uuid(),
            lines: cart.lines.into_iter().map(Into::into).collect(),
            subtotal: money::to_number(cart.totals.subtotal),
            tax: money::to_number(cart.totals.tax),
            total: money::to_number(cart.totals.total),
            created_at: cart.created_at.to_string(),
            updated_at: cart.updated_at.to_string(),
        }
    }
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartLineResponse {
    pub id: Uuid,
    pub item_id: Uuid,
    pub name: String,
    pub price: f64,
    pub quantity: u32,

    /// `price × quantity`, before tax
    pub total: f64,
}

impl From<CartLineRecord> for CartLineResponse {
    fn from(line: CartLineRecord) -> Self {
        Self {
            total: money::to_number(round_money(line.line_total())),
            id: line.uuid.into_uuid(),
            item_id: line.item_uuid.into_uuid(),
            name: line.name,
            price: money::to_number(line.price),
            quantity: line.quantity,
        }
    }
}

/// Get Cart Handler
///
/// Returns a cart with its totals.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .get_cart(cart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tillpoint_app::domain::carts::{CartsServiceError, MockCartsService, records::CartUuid};

    use crate::test_helpers::{carts_service, make_cart};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(repo, Router::with_path("carts/{cart}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_cart_with_totals() -> TestResult {
        let uuid = CartUuid::new();
        let cart = make_cart(uuid);

        let mut repo = MockCartsService::new();

        repo.expect_get_cart()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(cart));

        let mut res = TestClient::get(format!("http://example.com/carts/{uuid}"))
            .send(&make_service(repo))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["subtotal"], 25.0);
        assert_eq!(body["tax"], 2.0);
        assert_eq!(body["total"], 27.0);
        assert_eq!(body["lines"][0]["total"], 20.0);
        assert!(body["lines"][1]["itemId"].is_string(), "lines carry item ids");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_cart_returns_404() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_get_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/carts/{}", CartUuid::new()))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
