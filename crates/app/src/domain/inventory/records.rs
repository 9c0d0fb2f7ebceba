//! Inventory Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Inventory Item UUID
pub type InventoryItemUuid = TypedUuid<InventoryItemRecord>;

/// Inventory Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItemRecord {
    pub uuid: InventoryItemUuid,
    pub name: String,
    pub description: String,
    pub sku: String,
    pub category: String,
    pub price: Decimal,
    pub cost: Decimal,
    pub stock: u32,
    pub min_stock: u32,
    pub supplier: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl InventoryItemRecord {
    /// Whether stock has fallen to or below the restocking threshold.
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// Case-insensitive substring match over name, SKU and description.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();

        [&self.name, &self.sku, &self.description]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
