//! Delete Inventory Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;
use uuid::Uuid;

use crate::{extensions::*, inventory::errors::into_status_error, state::State};

/// Delete Inventory Item Handler
#[endpoint(
    tags("inventory"),
    summary = "Delete Inventory Item",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Inventory item deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Inventory item not found"),
    ),
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let item = item.into_inner();

    state
        .app
        .inventory
        .delete_item(item.into())
        .await
        .map_err(into_status_error)?;

    info!(item = %item, "inventory item deleted");

    Ok(StatusCode::OK)
}
