//! Cart Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::inventory::records::{InventoryItemRecord, InventoryItemUuid},
    pricing::{CheckoutTotals, PricedLine, TaxRate},
    store::StoreError,
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Cart Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartRecord {
    pub uuid: CartUuid,

    /// At most one line per inventory item, in the order items were first added.
    pub lines: Vec<CartLineRecord>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartRecord {
    #[must_use]
    pub fn new(uuid: CartUuid, now: Timestamp) -> Self {
        Self {
            uuid,
            lines: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add `quantity` units of `item`, merging into its existing line if there is one.
    ///
    /// Returns the UUID of the line that now holds the item.
    pub(crate) fn add_item(
        &mut self,
        item: &InventoryItemRecord,
        quantity: u32,
        now: Timestamp,
    ) -> CartLineUuid {
        self.updated_at = now;

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.item_uuid == item.uuid)
        {
            line.quantity = line.quantity.saturating_add(quantity);

            return line.uuid;
        }

        let line = CartLineRecord {
            uuid: CartLineUuid::new(),
            item_uuid: item.uuid,
            name: item.name.clone(),
            price: item.price,
            quantity,
        };

        let uuid = line.uuid;

        self.lines.push(line);

        uuid
    }

    /// Set a line's quantity. Zero or below removes the line.
    pub(crate) fn set_quantity(
        &mut self,
        line: CartLineUuid,
        quantity: i64,
        now: Timestamp,
    ) -> Result<(), StoreError> {
        let index = self.line_index(line)?;

        if quantity <= 0 {
            self.lines.remove(index);
        } else if let Some(line) = self.lines.get_mut(index) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }

        self.updated_at = now;

        Ok(())
    }

    pub(crate) fn remove_line(&mut self, line: CartLineUuid, now: Timestamp) -> Result<(), StoreError> {
        let index = self.line_index(line)?;

        self.lines.remove(index);
        self.updated_at = now;

        Ok(())
    }

    /// Subtotal, tax and total of the current lines.
    #[must_use]
    pub fn totals(&self, rate: TaxRate) -> CheckoutTotals {
        CheckoutTotals::forward(&self.lines, rate)
    }

    fn line_index(&self, line: CartLineUuid) -> Result<usize, StoreError> {
        self.lines
            .iter()
            .position(|record| record.uuid == line)
            .ok_or(StoreError::NotFound)
    }
}

/// Cart Line UUID
pub type CartLineUuid = TypedUuid<CartLineRecord>;

/// Cart Line Record
///
/// Name and price are captured when the item is first added.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineRecord {
    pub uuid: CartLineUuid,
    pub item_uuid: InventoryItemUuid,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl PricedLine for CartLineRecord {
    fn unit_price(&self) -> Decimal {
        self.price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}
