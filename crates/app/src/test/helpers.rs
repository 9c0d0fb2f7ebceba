//! Test Helpers

use jiff::Timestamp;
use rust_decimal::Decimal;
use smallvec::smallvec;

use crate::domain::{
    inventory::{data::NewInventoryItem, records::InventoryItemUuid},
    sales::records::{Customer, SaleItemRecord, SaleItemUuid, SaleRecord, SaleUuid},
};

/// An inventory item with plenty of stock, priced at 10.00.
pub(crate) fn new_item(uuid: InventoryItemUuid, name: &str, sku: &str) -> NewInventoryItem {
    NewInventoryItem {
        uuid,
        name: name.to_string(),
        description: String::new(),
        sku: sku.to_string(),
        category: "Accessories".to_string(),
        price: Decimal::new(1_000, 2),
        cost: Decimal::new(400, 2),
        stock: 100,
        min_stock: 5,
        supplier: "Test Supplier".to_string(),
    }
}

/// A single-line sale with the given tax-inclusive total, made at `created_at` (RFC 3339).
pub(crate) fn sale_at(created_at: &str, total: Decimal) -> Result<SaleRecord, jiff::Error> {
    let created_at: Timestamp = created_at.parse()?;

    Ok(SaleRecord {
        uuid: SaleUuid::new(),
        items: smallvec![SaleItemRecord {
            uuid: SaleItemUuid::new(),
            item_uuid: InventoryItemUuid::new(),
            name: "Test Item".to_string(),
            price: total,
            quantity: 1,
            total,
        }],
        total,
        customer: Customer::default(),
        created_at,
    })
}
