//! Repository abstractions for data access.

pub mod budget;
pub mod budget_item;
pub mod company_profile;
pub mod user;

pub use budget::BudgetRepository;
pub use budget_item::BudgetItemRepository;
pub use company_profile::CompanyProfileRepository;
pub use user::UserRepository;
