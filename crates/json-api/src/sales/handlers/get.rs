//! Get Sale Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tillpoint_app::domain::sales::records::{SaleItemRecord, SaleRecord};

use crate::{extensions::*, money, sales::errors::into_status_error, state::State};

/// Sale Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SaleResponse {
    pub id: Uuid,
    pub items: Vec<SaleItemResponse>,

    /// Tax-inclusive total
    pub total: f64,

    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub created_at: String,
}

impl From<SaleRecord> for SaleResponse {
    fn from(sale: SaleRecord) -> Self {
        Self {
            id: sale.uuid.into_uuid(),
            items: sale.items.into_iter().map(Into::into).collect(),
            total: money::to_number(sale.total),
            customer_name: sale.customer.name,
            customer_email: sale.customer.email,
            customer_phone: sale.customer.phone,
            created_at: sale.created_at.to_string(),
        }
    }
}

/// Sale Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SaleItemResponse {
    pub id: Uuid,
    pub item_id: Uuid,
    pub name: String,
    pub price: f64,
    pub quantity: u32,

    /// `price × quantity`, before tax
    pub total: f64,
}

impl From<SaleItemRecord> for SaleItemResponse {
    fn from(item: SaleItemRecord) -> Self {
        Self {
            id: item.uuid.into_uuid(),
            item_id: item.item_uuid.into_uuid(),
            name: item.name,
            price: money::to_number(item.price),
            quantity: item.quantity,
            total: money::to_number(item.total),
        }
    }
}

/// Get Sale Handler
#[endpoint(
    tags("sales"),
    summary = "Get Sale",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Sale"),
        (status_code = StatusCode::NOT_FOUND, description = "Sale not found"),
    ),
)]
pub(crate) async fn handler(
    sale: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<SaleResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let sale = state
        .app
        .sales
        .get_sale(sale.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(sale.into()))
}
