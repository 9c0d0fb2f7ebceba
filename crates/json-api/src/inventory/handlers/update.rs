//! Update Inventory Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use tillpoint_app::domain::inventory::data::InventoryItemUpdate;

use crate::{
    extensions::*,
    inventory::{errors::into_status_error, get::InventoryItemResponse},
    money,
    state::State,
};

/// Update Inventory Item Request
///
/// Omitted fields keep their current value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UpdateInventoryItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,

    /// Rounded to cents, half away from zero
    pub price: Option<f64>,

    /// Rounded to cents, half away from zero
    pub cost: Option<f64>,
    pub stock: Option<u32>,
    pub min_stock: Option<u32>,
    pub supplier: Option<String>,
}

impl UpdateInventoryItemRequest {
    fn into_update(self) -> Result<InventoryItemUpdate, StatusError> {
        Ok(InventoryItemUpdate {
            price: self
                .price
                .map(|price| money::from_number(price, "price"))
                .transpose()?,
            cost: self
                .cost
                .map(|cost| money::from_number(cost, "cost"))
                .transpose()?,
            name: self.name,
            description: self.description,
            sku: self.sku,
            category: self.category,
            stock: self.stock,
            min_stock: self.min_stock,
            supplier: self.supplier,
        })
    }
}

/// Update Inventory Item Handler
#[endpoint(
    tags("inventory"),
    summary = "Update Inventory Item",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Inventory item updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Inventory item not found"),
        (status_code = StatusCode::CONFLICT, description = "SKU already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
#[tracing::instrument(
    name = "inventory.update",
    skip(item, json, depot),
    fields(item_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    json: JsonBody<UpdateInventoryItemRequest>,
    depot: &mut Depot,
) -> Result<Json<InventoryItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let item = item.into_inner();
    let update = json.into_inner().into_update()?;

    tracing::Span::current().record("item_uuid", tracing::field::display(item));

    let updated = state
        .app
        .inventory
        .update_item(item.into(), update)
        .await
        .map_err(into_status_error)?;

    info!(stock = updated.stock, "inventory item updated");

    Ok(Json(updated.into()))
}
