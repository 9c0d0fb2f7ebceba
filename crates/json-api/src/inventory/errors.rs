//! Inventory Errors

use salvo::http::StatusError;

use tillpoint_app::domain::inventory::InventoryServiceError;

pub(crate) fn into_status_error(error: InventoryServiceError) -> StatusError {
    match error {
        InventoryServiceError::AlreadyExists => {
            StatusError::conflict().brief("Inventory item already exists")
        }
        InventoryServiceError::DuplicateSku => {
            StatusError::conflict().brief("SKU is already in use")
        }
        InventoryServiceError::InvalidData(field) => StatusError::bad_request()
            .brief(format!("Invalid inventory item payload: {field}")),
        InventoryServiceError::NotFound => StatusError::not_found(),
    }
}
