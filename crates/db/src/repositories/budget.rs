//! Budget repository for budget database operations.
//!
//! Derived fields (subtotal, IVA, grand total) are recomputed here from the
//! three base cost inputs on every write, so stored aggregates can never
//! silently diverge from recomputation.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use cotiza_core::budget::{self, CostInputs};

use crate::entities::budgets;

/// Error types for budget operations.
#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    /// Budget not found for this owner.
    #[error("Budget not found: {0}")]
    NotFound(Uuid),

    /// Invalid input rejected before persistence.
    #[error(transparent)]
    Invalid(#[from] budget::BudgetError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a budget.
#[derive(Debug, Clone)]
pub struct CreateBudgetInput {
    /// Client the budget is prepared for.
    pub client_name: String,
    /// Materials subtotal.
    pub materials_total: Decimal,
    /// Operational cost.
    pub operational_total: Decimal,
    /// Administrative cost.
    pub administrative_cost: Decimal,
}

/// Budget repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a budget, recomputing derived totals from the base fields.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::Invalid` if the client name is blank or any
    /// cost input is negative; nothing is persisted in that case.
    pub async fn create(
        &self,
        owner_id: Uuid,
        input: CreateBudgetInput,
    ) -> Result<budgets::Model, BudgetError> {
        let client_name = input.client_name.trim().to_string();
        if client_name.is_empty() {
            return Err(budget::BudgetError::MissingClientName.into());
        }

        let costs = CostInputs {
            materials_total: input.materials_total,
            operational_total: input.operational_total,
            administrative_cost: input.administrative_cost,
        };
        let totals = budget::compute_totals(&costs)?;

        let model = budgets::ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(owner_id),
            client_name: Set(client_name),
            materials_total: Set(costs.materials_total),
            operational_total: Set(costs.operational_total),
            administrative_cost: Set(costs.administrative_cost),
            subtotal: Set(totals.subtotal),
            iva: Set(totals.iva),
            grand_total: Set(totals.grand_total),
            created_at: Set(Utc::now().into()),
        };

        Ok(model.insert(&self.db).await?)
    }

    /// Lists an owner's budgets, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<budgets::Model>, DbErr> {
        budgets::Entity::find()
            .filter(budgets::Column::OwnerId.eq(owner_id))
            .order_by_desc(budgets::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Fetches a budget, enforcing ownership.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NotFound` when the budget does not exist or
    /// belongs to a different owner.
    pub async fn find_for_owner(
        &self,
        budget_id: Uuid,
        owner_id: Uuid,
    ) -> Result<budgets::Model, BudgetError> {
        budgets::Entity::find_by_id(budget_id)
            .filter(budgets::Column::OwnerId.eq(owner_id))
            .one(&self.db)
            .await?
            .ok_or(BudgetError::NotFound(budget_id))
    }
}
