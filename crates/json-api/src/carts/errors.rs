//! Cart Errors

use salvo::http::StatusError;

use tillpoint_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::AlreadyExists => StatusError::conflict().brief("Cart already exists"),
        CartsServiceError::SaleAlreadyExists => {
            StatusError::conflict().brief("Sale already exists")
        }
        CartsServiceError::InsufficientStock {
            item,
            requested,
            available,
        } => StatusError::conflict().brief(format!(
            "Insufficient stock for {item}: requested {requested}, available {available}"
        )),
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::LineNotFound => StatusError::not_found().brief("Cart line not found"),
        CartsServiceError::ItemNotFound => {
            StatusError::not_found().brief("Inventory item not found")
        }
        CartsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Quantity must be at least one")
        }
        CartsServiceError::EmptyCart => StatusError::bad_request().brief("Cart is empty"),
    }
}
