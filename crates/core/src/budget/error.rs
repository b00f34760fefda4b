//! Budget aggregation errors.

use cotiza_shared::AppError;
use cotiza_shared::types::MoneyError;
use thiserror::Error;

/// Errors from budget aggregation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    /// A fixed cost input is below zero.
    #[error("{0} cannot be negative")]
    NegativeAmount(&'static str),

    /// Client name missing or blank.
    #[error("client name is required")]
    MissingClientName,

    /// Invalid line item quantity or unit price.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
