//! Budget data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cotiza_shared::types::line_total;

use super::error::BudgetError;

/// The three independently supplied cost inputs of a budget.
///
/// These are the authoritative base fields; subtotal, IVA, and grand total
/// are always derivable from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostInputs {
    /// Materials subtotal.
    pub materials_total: Decimal,
    /// Operational cost.
    pub operational_total: Decimal,
    /// Administrative cost.
    pub administrative_cost: Decimal,
}

/// Derived budget totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetTotals {
    /// Sum of the three cost inputs.
    pub subtotal: Decimal,
    /// Tax at the fixed IVA rate, rounded to two decimals.
    pub iva: Decimal,
    /// Subtotal plus IVA.
    pub grand_total: Decimal,
}

/// One priced row within a budget.
///
/// Invariant: `total == round2(quantity * unit_price)`. Constructed only
/// through [`LineItem::new`], which enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item description.
    pub description: String,
    /// Non-negative quantity.
    pub quantity: i64,
    /// Non-negative unit price, two fractional digits.
    pub unit_price: Decimal,
    /// Derived total.
    pub total: Decimal,
}

impl LineItem {
    /// Creates a line item, computing its total.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::Money` if quantity or unit price is negative.
    pub fn new(
        description: impl Into<String>,
        quantity: i64,
        unit_price: Decimal,
    ) -> Result<Self, BudgetError> {
        let total = line_total(quantity, unit_price)?;
        Ok(Self {
            description: description.into(),
            quantity,
            unit_price,
            total,
        })
    }
}
