//! App Router

use salvo::Router;

use crate::{auth, carts, inventory, invoices, reports, sales};

/// Every route that needs a session.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(Router::with_path("auth/me").get(auth::me::handler))
        .push(
            Router::with_path("inventory")
                .get(inventory::index::handler)
                .post(inventory::create::handler)
                .push(Router::with_path("low-stock").get(inventory::low_stock::handler))
                .push(
                    Router::with_path("{item}")
                        .get(inventory::get::handler)
                        .put(inventory::update::handler)
                        .delete(inventory::delete::handler),
                ),
        )
        .push(
            Router::with_path("sales")
                .get(sales::index::handler)
                .post(sales::create::handler)
                .push(Router::with_path("{sale}").get(sales::get::handler)),
        )
        .push(
            Router::with_path("carts")
                .post(carts::create::handler)
                .push(
                    Router::with_path("{cart}")
                        .get(carts::get::handler)
                        .delete(carts::delete::handler)
                        .push(Router::with_path("checkout").post(carts::checkout::handler))
                        .push(
                            Router::with_path("items")
                                .post(carts::items::create::handler)
                                .push(
                                    Router::with_path("{line}")
                                        .put(carts::items::update::handler)
                                        .delete(carts::items::delete::handler),
                                ),
                        ),
                ),
        )
        .push(Router::with_path("invoices/{sale}").get(invoices::get::handler))
        .push(Router::with_path("reports").get(reports::sales::handler))
        .push(Router::with_path("dashboard").get(reports::dashboard::handler))
}
