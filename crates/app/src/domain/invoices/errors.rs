//! Invoices service errors.

use thiserror::Error;

use crate::{pricing::PricingError, store::StoreError};

#[derive(Debug, Error)]
pub enum InvoicesServiceError {
    #[error("invoice not found")]
    NotFound,

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("due date out of range: {0}")]
    DueDate(#[from] jiff::Error),
}

impl From<StoreError> for InvoicesServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound | StoreError::UniqueViolation(_) => Self::NotFound,
        }
    }
}
