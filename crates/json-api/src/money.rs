//! Money conversions between the domain's decimals and JSON numbers.

use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};
use salvo::prelude::StatusError;

use tillpoint_app::pricing::round_money;

/// Render an amount as a JSON number.
pub(crate) fn to_number(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

/// Read a JSON number as an amount rounded to cents.
pub(crate) fn from_number(value: f64, field: &str) -> Result<Decimal, StatusError> {
    Decimal::from_f64(value)
        .map(round_money)
        .ok_or_else(|| StatusError::bad_request().brief(format!("Invalid amount for {field}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_rounded_to_cents() {
        assert_eq!(
            from_number(9.999, "price").ok(),
            Some(Decimal::new(1_000, 2))
        );
        assert_eq!(from_number(19.99, "price").ok(), Some(Decimal::new(1_999, 2)));
        assert_eq!(from_number(0.005, "price").ok(), Some(Decimal::new(1, 2)));
        assert_eq!(from_number(0.004, "price").ok(), Some(Decimal::ZERO));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        assert!(from_number(f64::NAN, "price").is_err(), "NaN is not an amount");
        assert!(from_number(f64::INFINITY, "price").is_err(), "infinity is not an amount");
    }

    #[test]
    fn amounts_render_as_numbers() {
        assert!((to_number(Decimal::new(2_160, 2)) - 21.6).abs() < f64::EPSILON);
    }
}
