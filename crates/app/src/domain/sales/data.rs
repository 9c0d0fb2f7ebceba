//! Sale Data

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{
        inventory::records::InventoryItemUuid,
        sales::{
            errors::SalesServiceError,
            records::{Customer, SaleItemRecord, SaleItemUuid, SaleRecord, SaleUuid},
        },
    },
    pricing::{CheckoutTotals, PricedLine, TaxRate, round_money, validate_line},
};

/// New Sale Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub uuid: SaleUuid,
    pub items: Vec<NewSaleItem>,
    pub customer: Customer,
}

impl NewSale {
    /// Reject sales without lines and lines with a zero quantity or negative price.
    ///
    /// # Errors
    ///
    /// Returns [`SalesServiceError::NoItems`] or [`SalesServiceError::Pricing`].
    pub fn validate(&self) -> Result<(), SalesServiceError> {
        if self.items.is_empty() {
            return Err(SalesServiceError::NoItems);
        }

        for item in &self.items {
            validate_line(item.price, item.quantity)?;
        }

        Ok(())
    }

    /// Price the sale at `rate` and stamp it with `created_at`.
    pub(crate) fn into_record(self, rate: TaxRate, created_at: Timestamp) -> SaleRecord {
        let totals = CheckoutTotals::forward(&self.items, rate);

        SaleRecord {
            uuid: self.uuid,
            items: self
                .items
                .into_iter()
                .map(NewSaleItem::into_record)
                .collect(),
            total: totals.total,
            customer: self.customer,
            created_at,
        }
    }
}

/// New Sale Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewSaleItem {
    pub item_uuid: InventoryItemUuid,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl NewSaleItem {
    fn into_record(self) -> SaleItemRecord {
        let total = round_money(self.line_total());

        SaleItemRecord {
            uuid: SaleItemUuid::new(),
            item_uuid: self.item_uuid,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            total,
        }
    }
}

impl PricedLine for NewSaleItem {
    fn unit_price(&self) -> Decimal {
        self.price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}
