//! Shared value types.

pub mod money;

pub use money::{MoneyError, format_currency, line_total, round2};
