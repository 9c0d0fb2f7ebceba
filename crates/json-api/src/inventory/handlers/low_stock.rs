//! Low Stock Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    inventory::{errors::into_status_error, index::InventoryItemsResponse},
    state::State,
};

/// Low Stock Handler
///
/// Lists items whose stock is at or below their minimum.
#[endpoint(
    tags("inventory"),
    summary = "List Low Stock Items",
    security(("cookie_auth" = []), ("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<InventoryItemsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state
        .app
        .inventory
        .list_low_stock()
        .await
        .map_err(into_status_error)?;

    Ok(Json(InventoryItemsResponse {
        items: items.into_iter().map(Into::into).collect(),
    }))
}
