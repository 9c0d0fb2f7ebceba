//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, get::CartResponse},
    extensions::*,
    state::State,
};

/// Remove Cart Item Handler
#[endpoint(
    tags("carts"),
    summary = "Remove Cart Item",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Line removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or line not found"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    line: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .remove_line(cart.into_inner().into(), line.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tillpoint_app::domain::carts::{
        CartsServiceError, MockCartsService,
        records::{CartLineUuid, CartUuid},
    };

    use crate::test_helpers::{carts_service, make_cart};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(
            repo,
            Router::with_path("carts/{cart}/items/{line}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_remove_line_returns_cart() -> TestResult {
        let cart = CartUuid::new();
        let line = CartLineUuid::new();

        let mut repo = MockCartsService::new();

        repo.expect_remove_line()
            .once()
            .withf(move |c, l| *c == cart && *l == line)
            .return_once(move |_, _| Ok(make_cart(cart)));

        let mut res = TestClient::delete(format!("http://example.com/carts/{cart}/items/{line}"))
            .send(&make_service(repo))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, cart.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_from_missing_cart_returns_404() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_remove_line()
            .once()
            .return_once(|_, _| Err(CartsServiceError::NotFound));

        let res = TestClient::delete(format!(
            "http://example.com/carts/{}/items/{}",
            CartUuid::new(),
            CartLineUuid::new()
        ))
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
