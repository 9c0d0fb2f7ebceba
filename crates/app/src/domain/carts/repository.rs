//! Carts Repository

use jiff::Timestamp;

use crate::{
    domain::carts::records::{CartRecord, CartUuid},
    store::{StoreError, Tables},
};

#[derive(Debug, Clone, Default)]
pub(crate) struct CartsRepository;

impl CartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn get_cart<'t>(
        &self,
        tables: &'t Tables,
        cart: CartUuid,
    ) -> Result<&'t CartRecord, StoreError> {
        tables.carts.get(&cart).ok_or(StoreError::NotFound)
    }

    pub(crate) fn get_cart_mut<'t>(
        &self,
        tables: &'t mut Tables,
        cart: CartUuid,
    ) -> Result<&'t mut CartRecord, StoreError> {
        tables.carts.get_mut(&cart).ok_or(StoreError::NotFound)
    }

    pub(crate) fn create_cart<'t>(
        &self,
        tables: &'t mut Tables,
        cart: CartUuid,
        now: Timestamp,
    ) -> Result<&'t CartRecord, StoreError> {
        if tables.carts.contains_key(&cart) {
            return Err(StoreError::UniqueViolation("uuid"));
        }

        Ok(tables
            .carts
            .entry(cart)
            .or_insert_with(|| CartRecord::new(cart, now)))
    }

    pub(crate) fn delete_cart(
        &self,
        tables: &mut Tables,
        cart: CartUuid,
    ) -> Result<CartRecord, StoreError> {
        tables.carts.remove(&cart).ok_or(StoreError::NotFound)
    }
}
