//! Monetary arithmetic with fixed two-decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal` values carried with exactly two
//! fractional digits, so repeated additions never accumulate binary
//! floating-point error.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::error::AppError;

/// Currency prefix used on all rendered amounts.
pub const CURRENCY_SYMBOL: &str = "$";

/// Errors from monetary operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    /// Quantity below zero.
    #[error("quantity cannot be negative")]
    NegativeQuantity,

    /// Unit price below zero.
    #[error("unit price cannot be negative")]
    NegativeUnitPrice,
}

impl From<MoneyError> for AppError {
    fn from(err: MoneyError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

/// Rounds a value to two fractional digits, midpoint away from zero.
///
/// Midpoint-away-from-zero matches how stored totals were historically
/// produced, so recomputation reproduces persisted values exactly.
#[must_use]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes a line item total: `round2(quantity * unit_price)`.
///
/// # Errors
///
/// Returns `MoneyError` if quantity or unit price is negative. Validation
/// happens before any total is computed.
pub fn line_total(quantity: i64, unit_price: Decimal) -> Result<Decimal, MoneyError> {
    if quantity < 0 {
        return Err(MoneyError::NegativeQuantity);
    }
    if unit_price.is_sign_negative() {
        return Err(MoneyError::NegativeUnitPrice);
    }
    Ok(round2(Decimal::from(quantity) * unit_price))
}

/// Formats an amount as a currency string: `$` prefix, exactly two decimals.
#[must_use]
pub fn format_currency(value: Decimal) -> String {
    format!("{CURRENCY_SYMBOL}{:.2}", round2(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round2_exact_values_unchanged() {
        assert_eq!(round2(dec!(160.00)), dec!(160.00));
        assert_eq!(round2(dec!(0)), dec!(0));
    }

    #[test]
    fn test_round2_midpoint_away_from_zero() {
        assert_eq!(round2(dec!(2.505)), dec!(2.51));
        assert_eq!(round2(dec!(2.504)), dec!(2.50));
        assert_eq!(round2(dec!(-2.505)), dec!(-2.51));
    }

    #[test]
    fn test_line_total_cable_example() {
        // 3 x 2.50 = 7.50
        assert_eq!(line_total(3, dec!(2.50)).unwrap(), dec!(7.50));
    }

    #[test]
    fn test_line_total_zero_quantity() {
        assert_eq!(line_total(0, dec!(9.99)).unwrap(), dec!(0.00));
    }

    #[test]
    fn test_line_total_rejects_negative_quantity() {
        assert_eq!(
            line_total(-1, dec!(2.50)),
            Err(MoneyError::NegativeQuantity)
        );
    }

    #[test]
    fn test_line_total_rejects_negative_unit_price() {
        assert_eq!(
            line_total(1, dec!(-0.01)),
            Err(MoneyError::NegativeUnitPrice)
        );
    }

    #[rstest]
    #[case(dec!(7.5), "$7.50")]
    #[case(dec!(0), "$0.00")]
    #[case(dec!(190.4), "$190.40")]
    #[case(dec!(1234.567), "$1234.57")]
    fn test_format_currency(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_currency(value), expected);
    }

    #[test]
    fn test_repeated_addition_no_drift() {
        // 0.10 added one hundred times is exactly 10.00
        let mut sum = Decimal::ZERO;
        for _ in 0..100 {
            sum += dec!(0.10);
        }
        assert_eq!(sum, dec!(10.00));
    }
}
