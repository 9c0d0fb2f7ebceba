//! Sales Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    sales::{errors::into_status_error, get::SaleResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SalesResponse {
    /// Every recorded sale, newest first
    pub sales: Vec<SaleResponse>,
}

/// Sales Index Handler
#[endpoint(
    tags("sales"),
    summary = "List Sales",
    security(("cookie_auth" = []), ("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SalesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let sales = state
        .app
        .sales
        .list_sales()
        .await
        .map_err(into_status_error)?;

    Ok(Json(SalesResponse {
        sales: sales.into_iter().map(Into::into).collect(),
    }))
}
