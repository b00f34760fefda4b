//! Budget aggregation.
//!
//! Derives subtotal, IVA, and grand total from the three fixed cost inputs,
//! and per-line totals from quantity and unit price.

pub mod error;
pub mod totals;
pub mod types;

#[cfg(test)]
mod tests;

#[cfg(test)]
mod props;

pub use error::BudgetError;
pub use totals::{IVA_RATE_PERCENT, compute_totals, iva_rate, verify_totals};
pub use types::{BudgetTotals, CostInputs, LineItem};
