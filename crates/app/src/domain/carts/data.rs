//! Cart Data

use crate::domain::{
    carts::records::CartUuid,
    inventory::records::InventoryItemUuid,
    sales::records::{Customer, SaleUuid},
};

/// New Cart Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCart {
    pub uuid: CartUuid,
}

/// New Cart Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub item_uuid: InventoryItemUuid,
    pub quantity: u32,
}

/// Checkout Data
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutDetails {
    /// UUID the resulting sale is recorded under.
    pub sale_uuid: SaleUuid,
    pub customer: Customer,
}
