//! Sale Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::{
    domain::inventory::records::InventoryItemUuid, pricing::PricedLine, uuids::TypedUuid,
};

/// Sale UUID
pub type SaleUuid = TypedUuid<SaleRecord>;

/// Sale line items. Most sales carry three lines or fewer.
pub type SaleItems = SmallVec<[SaleItemRecord; 3]>;

/// Sale Record
///
/// Created once at checkout and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    pub uuid: SaleUuid,
    pub items: SaleItems,

    /// Tax-inclusive total, rounded to cents.
    pub total: Decimal,

    pub customer: Customer,
    pub created_at: Timestamp,
}

/// Sale Item UUID
pub type SaleItemUuid = TypedUuid<SaleItemRecord>;

/// Sale Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct SaleItemRecord {
    pub uuid: SaleItemUuid,
    pub item_uuid: InventoryItemUuid,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub total: Decimal,
}

impl PricedLine for SaleItemRecord {
    fn unit_price(&self) -> Decimal {
        self.price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Optional customer contact details captured at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
