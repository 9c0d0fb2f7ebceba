//! Get Inventory Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tillpoint_app::domain::inventory::records::InventoryItemRecord;

use crate::{extensions::*, inventory::errors::into_status_error, money, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InventoryItemResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub sku: String,
    pub category: String,

    /// Selling price
    pub price: f64,

    /// Unit cost from the supplier
    pub cost: f64,

    pub stock: u32,
    pub min_stock: u32,
    pub supplier: String,

    /// Whether stock is at or below `minStock`
    pub is_low_stock: bool,

    pub created_at: String,
    pub updated_at: String,
}

impl From<InventoryItemRecord> for InventoryItemResponse {
    fn from(item: InventoryItemRecord) -> Self {
        Self {
            is_low_stock: item.is_low_stock(),
            id: item.uuid.into_uuid(),
            name: item.name,
            description: item.description,
            sku: item.sku,
            category: item.category,
            price: money::to_number(item.price),
            cost: money::to_number(item.cost),
            stock: item.stock,
            min_stock: item.min_stock,
            supplier: item.supplier,
            created_at: item.created_at.to_string(),
            updated_at: item.updated_at.to_string(),
        }
    }
}

/// Get Inventory Item Handler
#[endpoint(
    tags("inventory"),
    summary = "Get Inventory Item",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Inventory item"),
        (status_code = StatusCode::NOT_FOUND, description = "Inventory item not found"),
    ),
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<InventoryItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .inventory
        .get_item(item.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(item.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tillpoint_app::domain::inventory::{
        InventoryServiceError, MockInventoryService, records::InventoryItemUuid,
    };

    use crate::test_helpers::{inventory_service, make_item};

    use super::*;

    fn make_service(repo: MockInventoryService) -> Service {
        inventory_service(repo, Router::with_path("inventory/{item}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_item_in_camel_case() -> TestResult {
        let uuid = InventoryItemUuid::new();
        let item = make_item(uuid, "UC-1");

        let mut repo = MockInventoryService::new();

        repo.expect_get_item()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(item));

        let mut res = TestClient::get(format!("http://example.com/inventory/{uuid}"))
            .send(&make_service(repo))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["id"], uuid.to_string());
        assert_eq!(body["minStock"], 5);
        assert_eq!(body["price"], 9.99);
        assert_eq!(body["isLowStock"], false);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_item_returns_404() -> TestResult {
        let uuid = InventoryItemUuid::new();

        let mut repo = MockInventoryService::new();

        repo.expect_get_item()
            .once()
            .return_once(|_| Err(InventoryServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/inventory/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_with_malformed_id_returns_400() -> TestResult {
        let mut repo = MockInventoryService::new();

        repo.expect_get_item().never();

        let res = TestClient::get("http://example.com/inventory/not-a-uuid")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
