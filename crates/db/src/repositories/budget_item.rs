//! Budget item repository.
//!
//! Items are replaced wholesale per budget, never patched individually. The
//! replacement runs inside a single transaction so concurrent readers never
//! observe a half-replaced item list.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use cotiza_core::budget::{self, LineItem};

use crate::entities::budget_items;

/// Error types for budget item operations.
#[derive(Debug, thiserror::Error)]
pub enum BudgetItemError {
    /// Invalid line item rejected before persistence.
    #[error(transparent)]
    Invalid(#[from] budget::BudgetError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for one replacement line item.
#[derive(Debug, Clone)]
pub struct LineItemInput {
    /// Item description.
    pub description: String,
    /// Non-negative quantity.
    pub quantity: i64,
    /// Non-negative unit price.
    pub unit_price: rust_decimal::Decimal,
}

/// Budget item repository.
#[derive(Debug, Clone)]
pub struct BudgetItemRepository {
    db: DatabaseConnection,
}

impl BudgetItemRepository {
    /// Creates a new budget item repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces all items for a budget in one transaction.
    ///
    /// Totals are derived via the aggregator before anything touches the
    /// database; an invalid item aborts the whole replacement. An empty
    /// input leaves the budget with zero items. Other budgets' items are
    /// never affected.
    ///
    /// # Errors
    ///
    /// Returns `BudgetItemError::Invalid` for a negative quantity or unit
    /// price, `BudgetItemError::Database` on transaction failure.
    pub async fn replace_items(
        &self,
        budget_id: Uuid,
        items: Vec<LineItemInput>,
    ) -> Result<Vec<budget_items::Model>, BudgetItemError> {
        // Validate and derive totals before opening the transaction.
        let line_items: Vec<LineItem> = items
            .into_iter()
            .map(|item| LineItem::new(item.description, item.quantity, item.unit_price))
            .collect::<Result<_, _>>()?;

        let txn = self.db.begin().await?;

        budget_items::Entity::delete_many()
            .filter(budget_items::Column::BudgetId.eq(budget_id))
            .exec(&txn)
            .await?;

        let models: Vec<budget_items::ActiveModel> = line_items
            .iter()
            .enumerate()
            .map(|(position, item)| {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let position = position as i32;
                budget_items::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    budget_id: Set(budget_id),
                    position: Set(position),
                    description: Set(item.description.clone()),
                    quantity: Set(item.quantity),
                    unit_price: Set(item.unit_price),
                    total: Set(item.total),
                }
            })
            .collect();

        if !models.is_empty() {
            budget_items::Entity::insert_many(models).exec(&txn).await?;
        }

        txn.commit().await?;
        debug!(budget_id = %budget_id, count = line_items.len(), "Replaced budget items");

        self.list_for_budget(budget_id)
            .await
            .map_err(BudgetItemError::Database)
    }

    /// Lists a budget's items in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_for_budget(
        &self,
        budget_id: Uuid,
    ) -> Result<Vec<budget_items::Model>, DbErr> {
        budget_items::Entity::find()
            .filter(budget_items::Column::BudgetId.eq(budget_id))
            .order_by_asc(budget_items::Column::Position)
            .all(&self.db)
            .await
    }
}
