//! Carts service errors.

use thiserror::Error;

use crate::{domain::inventory::records::InventoryItemUuid, store::StoreError};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart already exists")]
    AlreadyExists,

    #[error("cart not found")]
    NotFound,

    #[error("cart line not found")]
    LineNotFound,

    #[error("inventory item not found")]
    ItemNotFound,

    #[error("quantity must be at least one")]
    InvalidQuantity,

    #[error("cart is empty")]
    EmptyCart,

    #[error("sale already exists")]
    SaleAlreadyExists,

    #[error("insufficient stock for {item}: requested {requested}, available {available}")]
    InsufficientStock {
        item: InventoryItemUuid,
        requested: u32,
        available: u32,
    },
}

impl From<StoreError> for CartsServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => Self::NotFound,
            StoreError::UniqueViolation(_) => Self::AlreadyExists,
        }
    }
}
