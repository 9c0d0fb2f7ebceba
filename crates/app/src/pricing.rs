//! Pricing
//!
//! Checkout arithmetic shared by carts, sales and invoices. All amounts are
//! [`Decimal`]s; every value that leaves this module is rounded to cents.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of decimal places money is displayed with.
pub const MONEY_DP: u32 = 2;

/// Errors raised while building pricing inputs.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// Tax rate was negative.
    #[error("tax rate must not be negative")]
    NegativeTaxRate,

    /// Line quantity was zero.
    #[error("line quantity must be at least one")]
    ZeroQuantity,

    /// Line price was negative.
    #[error("line price must not be negative")]
    NegativePrice,

    /// Arithmetic overflowed the decimal range.
    #[error("amount overflowed")]
    Overflow,
}

/// Round an amount to cents, half away from zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Sales tax applied at checkout, expressed as a fraction (`0.08` for 8%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxRate(Percentage);

impl TaxRate {
    /// Build a tax rate from a fraction.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::NegativeTaxRate`] if `fraction` is below zero.
    pub fn new(fraction: Decimal) -> Result<Self, PricingError> {
        if fraction.is_sign_negative() && !fraction.is_zero() {
            return Err(PricingError::NegativeTaxRate);
        }

        Ok(Self(Percentage::from(fraction)))
    }

    /// The rate as a plain decimal fraction.
    #[must_use]
    pub fn fraction(&self) -> Decimal {
        self.0 * Decimal::ONE
    }

    /// Tax owed on `amount`, unrounded.
    #[must_use]
    pub fn tax_on(&self, amount: Decimal) -> Decimal {
        self.0 * amount
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self(Percentage::from(Decimal::new(8, 2)))
    }
}

/// A priced quantity of something, as it appears on a cart or sale line.
pub trait PricedLine {
    /// Unit price.
    fn unit_price(&self) -> Decimal;

    /// Number of units.
    fn quantity(&self) -> u32;

    /// `unit_price × quantity`.
    fn line_total(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity())
    }
}

/// Subtotal, tax and grand total of a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckoutTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl CheckoutTotals {
    /// Compute totals for a list of lines.
    ///
    /// The subtotal and tax are rounded independently so that `total` is always
    /// `subtotal + tax` to the cent.
    pub fn forward<L: PricedLine>(lines: &[L], rate: TaxRate) -> Self {
        let subtotal = round_money(lines.iter().map(PricedLine::line_total).sum());
        let tax = round_money(rate.tax_on(subtotal));

        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    /// Back the subtotal and tax out of a tax-inclusive total.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the division cannot be represented.
    pub fn inverse(total: Decimal, rate: TaxRate) -> Result<Self, PricingError> {
        let divisor = Decimal::ONE + rate.fraction();

        let subtotal = round_money(total.checked_div(divisor).ok_or(PricingError::Overflow)?);

        Ok(Self {
            subtotal,
            tax: total - subtotal,
            total,
        })
    }
}

/// Validate a line's price and quantity.
///
/// # Errors
///
/// Returns [`PricingError::NegativePrice`] or [`PricingError::ZeroQuantity`].
pub fn validate_line(price: Decimal, quantity: u32) -> Result<(), PricingError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(PricingError::NegativePrice);
    }

    if quantity == 0 {
        return Err(PricingError::ZeroQuantity);
    }

    Ok(())
}
