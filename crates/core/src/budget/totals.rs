//! Totals computation from fixed cost inputs.

use rust_decimal::Decimal;

use cotiza_shared::types::round2;

use super::error::BudgetError;
use super::types::{BudgetTotals, CostInputs};

/// Fixed IVA rate, in percent. Not user-configurable.
pub const IVA_RATE_PERCENT: u32 = 19;

/// Returns the IVA rate as a decimal fraction (0.19).
#[must_use]
pub fn iva_rate() -> Decimal {
    Decimal::new(i64::from(IVA_RATE_PERCENT), 2)
}

/// Computes subtotal, IVA, and grand total from the cost inputs.
///
/// ```text
/// subtotal    = materials + operational + administrative
/// iva         = round2(subtotal * 0.19)
/// grand_total = subtotal + iva
/// ```
///
/// Deterministic: re-running on the same inputs reproduces the same outputs
/// exactly, so stored derived fields can always be reconstructed. Note that
/// `materials_total` is taken as supplied; it is NOT cross-checked against
/// the sum of line item totals.
///
/// # Errors
///
/// Returns `BudgetError::NegativeAmount` if any input is negative, before
/// any total is computed.
pub fn compute_totals(inputs: &CostInputs) -> Result<BudgetTotals, BudgetError> {
    if inputs.materials_total.is_sign_negative() {
        return Err(BudgetError::NegativeAmount("materials total"));
    }
    if inputs.operational_total.is_sign_negative() {
        return Err(BudgetError::NegativeAmount("operational total"));
    }
    if inputs.administrative_cost.is_sign_negative() {
        return Err(BudgetError::NegativeAmount("administrative cost"));
    }

    let subtotal = inputs.materials_total + inputs.operational_total + inputs.administrative_cost;
    let iva = round2(subtotal * iva_rate());
    let grand_total = subtotal + iva;

    Ok(BudgetTotals {
        subtotal,
        iva,
        grand_total,
    })
}

/// Checks that stored totals match a fresh recomputation from the inputs.
///
/// Used on read paths to detect aggregates that have silently diverged from
/// the base fields.
#[must_use]
pub fn verify_totals(inputs: &CostInputs, stored: &BudgetTotals) -> bool {
    compute_totals(inputs).is_ok_and(|fresh| {
        fresh.subtotal == stored.subtotal
            && fresh.iva == stored.iva
            && fresh.grand_total == stored.grand_total
    })
}
