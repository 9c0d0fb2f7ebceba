//! Sales service errors.

use thiserror::Error;

use crate::{pricing::PricingError, store::StoreError};

#[derive(Debug, Error)]
pub enum SalesServiceError {
    #[error("sale already exists")]
    AlreadyExists,

    #[error("sale not found")]
    NotFound,

    #[error("sale has no items")]
    NoItems,

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl From<StoreError> for SalesServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => Self::NotFound,
            StoreError::UniqueViolation(_) => Self::AlreadyExists,
        }
    }
}
