//! Cart Models

use jiff::Timestamp;

use crate::{
    domain::carts::records::{CartLineRecord, CartRecord, CartUuid},
    pricing::{CheckoutTotals, TaxRate},
};

/// A cart with its totals priced at the configured tax rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub uuid: CartUuid,
    pub lines: Vec<CartLineRecord>,
    pub totals: CheckoutTotals,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Cart {
    pub(crate) fn priced(record: &CartRecord, rate: TaxRate) -> Self {
        Self {
            uuid: record.uuid,
            lines: record.lines.clone(),
            totals: record.totals(rate),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
