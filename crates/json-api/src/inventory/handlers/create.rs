//! Create Inventory Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use tillpoint_app::domain::inventory::{data::NewInventoryItem, records::InventoryItemUuid};

use crate::{
    extensions::*,
    inventory::{errors::into_status_error, get::InventoryItemResponse},
    money,
    state::State,
};

/// Create Inventory Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateInventoryItemRequest {
    /// Client-chosen id; one is generated when omitted
    #[serde(default)]
    pub id: Option<Uuid>,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub sku: String,

    #[serde(default)]
    pub category: String,

    /// Rounded to cents, half away from zero
    pub price: f64,

    /// Rounded to cents, half away from zero
    #[serde(default)]
    pub cost: f64,

    #[serde(default)]
    pub stock: u32,

    #[serde(default)]
    pub min_stock: u32,

    #[serde(default)]
    pub supplier: String,
}

impl CreateInventoryItemRequest {
    fn into_new_item(self) -> Result<NewInventoryItem, StatusError> {
        Ok(NewInventoryItem {
            uuid: self.id.map_or_else(InventoryItemUuid::new, Into::into),
            price: money::from_number(self.price, "price")?,
            cost: money::from_number(self.cost, "cost")?,
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

/// Create Inventory Item Handler
#[endpoint(
    tags("inventory"),
    summary = "Create Inventory Item",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Inventory item created"),
        (status_code = StatusCode::CONFLICT, description = "Id or SKU already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateInventoryItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<InventoryItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let new_item = json.into_inner().into_new_item()?;

    let item = state
        .app
        .inventory
        .create_item(new_item)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/inventory/{}", item.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(item = %item.uuid, sku = %item.sku, "inventory item created");

    Ok(Json(item.into()))
}
