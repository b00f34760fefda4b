//! `SeaORM` entity definitions.

pub mod budget_items;
pub mod budgets;
pub mod company_profiles;
pub mod users;
