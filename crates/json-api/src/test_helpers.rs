//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use tillpoint_app::{
    auth::{MockAuthService, SessionUser},
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::Cart,
            records::{CartLineRecord, CartLineUuid, CartUuid},
        },
        inventory::{
            MockInventoryService,
            records::{InventoryItemRecord, InventoryItemUuid},
        },
        invoices::MockInvoicesService,
        reports::MockReportsService,
        sales::{
            MockSalesService,
            records::{Customer, SaleItemRecord, SaleItemUuid, SaleRecord, SaleUuid},
        },
    },
    pricing::CheckoutTotals,
    store::Store,
};

use crate::{
    extensions::*,
    state::{CookieSettings, State},
};

pub(crate) fn test_user() -> SessionUser {
    SessionUser {
        id: "1".to_owned(),
        email: "admin@example.com".to_owned(),
        name: "Admin User".to_owned(),
    }
}

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_session_user(test_user());
    ctrl.call_next(req, depot, res).await;
}

/// An app whose services all panic when called.
fn strict_app() -> AppContext {
    AppContext {
        store: Store::default(),
        inventory: Arc::new(MockInventoryService::new()),
        sales: Arc::new(MockSalesService::new()),
        carts: Arc::new(MockCartsService::new()),
        invoices: Arc::new(MockInvoicesService::new()),
        reports: Arc::new(MockReportsService::new()),
        auth: Arc::new(MockAuthService::new()),
    }
}

pub(crate) fn state_with(configure: impl FnOnce(&mut AppContext)) -> Arc<State> {
    let mut app = strict_app();

    configure(&mut app);

    State::from_app_context(app, CookieSettings::default())
}

/// Serve `route` behind an already-authenticated session.
pub(crate) fn authenticated_service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn inventory_service(inventory: MockInventoryService, route: Router) -> Service {
    authenticated_service(state_with(|app| app.inventory = Arc::new(inventory)), route)
}

pub(crate) fn sales_service(sales: MockSalesService, route: Router) -> Service {
    authenticated_service(state_with(|app| app.sales = Arc::new(sales)), route)
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    authenticated_service(state_with(|app| app.carts = Arc::new(carts)), route)
}

pub(crate) fn invoices_service(invoices: MockInvoicesService, route: Router) -> Service {
    authenticated_service(state_with(|app| app.invoices = Arc::new(invoices)), route)
}

pub(crate) fn reports_service(reports: MockReportsService, route: Router) -> Service {
    authenticated_service(state_with(|app| app.reports = Arc::new(reports)), route)
}

pub(crate) fn make_item(uuid: InventoryItemUuid, sku: &str) -> InventoryItemRecord {
    InventoryItemRecord {
        uuid,
        name: "USB-C Cable".to_owned(),
        description: "1m braided cable".to_owned(),
        sku: sku.to_owned(),
        category: "Accessories".to_owned(),
        price: Decimal::new(999, 2),
        cost: Decimal::new(350, 2),
        stock: 20,
        min_stock: 5,
        supplier: "Cables Co".to_owned(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// A single-line sale of two units at 10.00 with 8% tax.
pub(crate) fn make_sale(uuid: SaleUuid) -> SaleRecord {
    SaleRecord {
        uuid,
        items: [SaleItemRecord {
            uuid: SaleItemUuid::new(),
            item_uuid: InventoryItemUuid::new(),
            name: "iPhone 15 Case".to_owned(),
            price: Decimal::new(1_000, 2),
            quantity: 2,
            total: Decimal::new(2_000, 2),
        }]
        .into_iter()
        .collect(),
        total: Decimal::new(2_160, 2),
        customer: Customer {
            name: Some("Ada".to_owned()),
            email: None,
            phone: None,
        },
        created_at: Timestamp::UNIX_EPOCH,
    }
}

/// A cart holding two units at 10.00 and one at 5.00.
pub(crate) fn make_cart(uuid: CartUuid) -> Cart {
    Cart {
        uuid,
        lines: vec![
            CartLineRecord {
                uuid: CartLineUuid::new(),
                item_uuid: InventoryItemUuid::new(),
                name: "iPhone 15 Case".to_owned(),
                price: Decimal::new(1_000, 2),
                quantity: 2,
            },
            CartLineRecord {
                uuid: CartLineUuid::new(),
                item_uuid: InventoryItemUuid::new(),
                name: "USB-C Cable".to_owned(),
                price: Decimal::new(500, 2),
                quantity: 1,
            },
        ],
        totals: CheckoutTotals {
            subtotal: Decimal::new(2_500, 2),
            tax: Decimal::new(200, 2),
            total: Decimal::new(2_700, 2),
        },
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
