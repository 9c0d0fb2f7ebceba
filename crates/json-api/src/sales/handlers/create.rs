//! Create Sale Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use tillpoint_app::domain::sales::{
    data::{NewSale, NewSaleItem},
    records::{Customer, SaleUuid},
};

use crate::{
    extensions::*,
    money,
    sales::{errors::into_status_error, get::SaleResponse},
    state::State,
};

/// Create Sale Request
///
/// Line totals and the tax-inclusive total are computed by the server.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateSaleRequest {
    /// Client-chosen id; one is generated when omitted
    #[serde(default)]
    pub id: Option<Uuid>,

    pub items: Vec<CreateSaleItemRequest>,

    #[serde(default)]
    pub customer_name: Option<String>,

    #[serde(default)]
    pub customer_email: Option<String>,

    #[serde(default)]
    pub customer_phone: Option<String>,
}

/// Create Sale Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateSaleItemRequest {
    pub item_id: Uuid,
    pub name: String,

    /// Unit price, rounded to cents half away from zero
    pub price: f64,

    pub quantity: u32,
}

impl CreateSaleRequest {
    fn into_new_sale(self) -> Result<NewSale, StatusError> {
        let items = self
            .items
            .into_iter()
            .map(|item| {
                Ok(NewSaleItem {
                    item_uuid: item.item_id.into(),
                    name: item.name,
                    price: money::from_number(item.price, "price")?,
                    quantity: item.quantity,
                })
            })
            .collect::<Result<Vec<_>, StatusError>>()?;

        Ok(NewSale {
            uuid: self.id.map_or_else(SaleUuid::new, Into::into),
            items,
            customer: customer(self.customer_name, self.customer_email, self.customer_phone),
        })
    }
}

/// Customer details with blank fields dropped.
pub(crate) fn customer(
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
) -> Customer {
    fn present(value: Option<String>) -> Option<String> {
        value
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
    }

    Customer {
        name: present(name),
        email: present(email),
        phone: present(phone),
    }
}

/// Create Sale Handler
#[endpoint(
    tags("sales"),
    summary = "Record Sale",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Sale recorded"),
        (status_code = StatusCode::CONFLICT, description = "Sale already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
#[tracing::instrument(
    name = "sales.create",
    skip(json, depot, res),
    fields(sale_uuid = tracing::field::Empty, item_count = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateSaleRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SaleResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let new_sale = json.into_inner().into_new_sale()?;

    let span = tracing::Span::current();

    span.record("sale_uuid", tracing::field::display(new_sale.uuid));
    span.record("item_count", new_sale.items.len());

    let sale = state
        .app
        .sales
        .create_sale(new_sale)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/sales/{}", sale.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(total = %sale.total, "sale recorded");

    Ok(Json(sale.into()))
}
