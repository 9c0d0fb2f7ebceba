//! Inventory service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum InventoryServiceError {
    #[error("inventory item already exists")]
    AlreadyExists,

    #[error("inventory item not found")]
    NotFound,

    #[error("sku is already in use")]
    DuplicateSku,

    #[error("invalid value for {0}")]
    InvalidData(&'static str),
}

impl From<StoreError> for InventoryServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => Self::NotFound,
            StoreError::UniqueViolation("sku") => Self::DuplicateSku,
            StoreError::UniqueViolation(_) => Self::AlreadyExists,
        }
    }
}
