//! Inventory Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tillpoint_app::domain::inventory::data::InventoryFilter;

use crate::{
    extensions::*,
    inventory::{errors::into_status_error, get::InventoryItemResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InventoryItemsResponse {
    /// The matching items, in the order they were added
    pub items: Vec<InventoryItemResponse>,
}

/// Inventory Index Handler
///
/// Lists items, optionally filtered by a search term and a category.
#[endpoint(
    tags("inventory"),
    summary = "List Inventory",
    security(("cookie_auth" = []), ("bearer_auth" = []))
)]
pub(crate) async fn handler(
    search: QueryParam<String, false>,
    category: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<InventoryItemsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = InventoryFilter {
        search: search.into_inner(),
        category: category.into_inner(),
    };

    let items = state
        .app
        .inventory
        .list_items(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(InventoryItemsResponse {
        items: items.into_iter().map(Into::into).collect(),
    }))
}
