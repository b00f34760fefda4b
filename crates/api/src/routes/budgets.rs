//! Budget management routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::{AppState, middleware::AuthUser};
use cotiza_core::budget::{BudgetTotals, CostInputs, LineItem, verify_totals};
use cotiza_core::document::{self, CompanyProfile, PrintableBudget};
use cotiza_db::{
    BudgetItemRepository, BudgetRepository, CompanyProfileRepository,
    entities::{budget_items, budgets},
    repositories::{
        budget::{BudgetError, CreateBudgetInput},
        budget_item::{BudgetItemError, LineItemInput},
    },
};

/// Creates the budget routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", get(list_budgets))
        .route("/budgets", post(create_budget))
        .route("/budgets/{budget_id}/items", get(list_items))
        .route("/budgets/{budget_id}/items", put(replace_items))
        .route("/budgets/{budget_id}/document", get(get_document))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating a budget.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBudgetRequest {
    /// Client the budget is prepared for.
    #[validate(length(min = 1, max = 255))]
    pub client_name: String,
    /// Materials subtotal.
    pub materials_total: Decimal,
    /// Operational cost.
    pub operational_total: Decimal,
    /// Administrative cost.
    pub administrative_cost: Decimal,
}

/// Request body for replacing a budget's items.
#[derive(Debug, Deserialize)]
pub struct ReplaceItemsRequest {
    /// Full replacement item list; may be empty.
    pub items: Vec<ItemInput>,
}

/// Input for a single line item.
#[derive(Debug, Deserialize)]
pub struct ItemInput {
    /// Item description.
    pub description: String,
    /// Non-negative quantity.
    pub quantity: i64,
    /// Non-negative unit price.
    pub unit_price: Decimal,
}

/// Response for a budget.
#[derive(Debug, Serialize)]
pub struct BudgetResponse {
    /// Budget ID.
    pub id: Uuid,
    /// Client name.
    pub client_name: String,
    /// Materials subtotal.
    pub materials_total: Decimal,
    /// Operational cost.
    pub operational_total: Decimal,
    /// Administrative cost.
    pub administrative_cost: Decimal,
    /// Derived subtotal.
    pub subtotal: Decimal,
    /// Derived IVA.
    pub iva: Decimal,
    /// Derived grand total.
    pub grand_total: Decimal,
    /// Created at timestamp (ISO 8601).
    pub created_at: String,
}

impl From<budgets::Model> for BudgetResponse {
    fn from(model: budgets::Model) -> Self {
        Self {
            id: model.id,
            client_name: model.client_name,
            materials_total: model.materials_total,
            operational_total: model.operational_total,
            administrative_cost: model.administrative_cost,
            subtotal: model.subtotal,
            iva: model.iva,
            grand_total: model.grand_total,
            created_at: model.created_at.to_rfc3339(),
        }
    }
}

/// Response for a line item.
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    /// Item ID.
    pub id: Uuid,
    /// Insertion position, 0-based.
    pub position: i32,
    /// Item description.
    pub description: String,
    /// Quantity.
    pub quantity: i64,
    /// Unit price.
    pub unit_price: Decimal,
    /// Derived total.
    pub total: Decimal,
}

impl From<budget_items::Model> for ItemResponse {
    fn from(model: budget_items::Model) -> Self {
        Self {
            id: model.id,
            position: model.position,
            description: model.description,
            quantity: model.quantity,
            unit_price: model.unit_price,
            total: model.total,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /budgets - List the caller's budgets, newest first.
async fn list_budgets(State(state): State<AppState>, user: AuthUser) -> impl IntoResponse {
    let repo = BudgetRepository::new((*state.db).clone());

    match repo.list_by_owner(user.owner_id()).await {
        Ok(budgets) => {
            let response: Vec<BudgetResponse> =
                budgets.into_iter().map(BudgetResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list budgets");
            internal_error()
        }
    }
}

/// POST /budgets - Create a budget; derived totals are recomputed server-side.
async fn create_budget(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateBudgetRequest>,
) -> impl IntoResponse {
    if let Err(e) = payload.validate() {
        return invalid_input(&e.to_string());
    }

    let repo = BudgetRepository::new((*state.db).clone());
    let input = CreateBudgetInput {
        client_name: payload.client_name,
        materials_total: payload.materials_total,
        operational_total: payload.operational_total,
        administrative_cost: payload.administrative_cost,
    };

    match repo.create(user.owner_id(), input).await {
        Ok(budget) => {
            info!(budget_id = %budget.id, owner_id = %user.owner_id(), "Budget created");
            (StatusCode::CREATED, Json(BudgetResponse::from(budget))).into_response()
        }
        Err(BudgetError::Invalid(e)) => invalid_input(&e.to_string()),
        Err(e) => {
            error!(error = %e, "Failed to create budget");
            internal_error()
        }
    }
}

/// GET /budgets/{budget_id}/items - List a budget's items in insertion order.
async fn list_items(
    State(state): State<AppState>,
    user: AuthUser,
    Path(budget_id): Path<Uuid>,
) -> impl IntoResponse {
    if let Err(response) = fetch_owned_budget(&state, budget_id, user.owner_id()).await {
        return response;
    }

    let item_repo = BudgetItemRepository::new((*state.db).clone());
    match item_repo.list_for_budget(budget_id).await {
        Ok(items) => {
            let response: Vec<ItemResponse> = items.into_iter().map(ItemResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list budget items");
            internal_error()
        }
    }
}

/// PUT /budgets/{budget_id}/items - Replace all items transactionally.
async fn replace_items(
    State(state): State<AppState>,
    user: AuthUser,
    Path(budget_id): Path<Uuid>,
    Json(payload): Json<ReplaceItemsRequest>,
) -> impl IntoResponse {
    if let Err(response) = fetch_owned_budget(&state, budget_id, user.owner_id()).await {
        return response;
    }

    let inputs: Vec<LineItemInput> = payload
        .items
        .into_iter()
        .map(|item| LineItemInput {
            description: item.description,
            quantity: item.quantity,
            unit_price: item.unit_price,
        })
        .collect();

    let item_repo = BudgetItemRepository::new((*state.db).clone());
    match item_repo.replace_items(budget_id, inputs).await {
        Ok(items) => {
            let response: Vec<ItemResponse> = items.into_iter().map(ItemResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(BudgetItemError::Invalid(e)) => invalid_input(&e.to_string()),
        Err(e) => {
            error!(error = %e, "Failed to replace budget items");
            internal_error()
        }
    }
}

/// GET /budgets/{budget_id}/document - Assemble the printable document tree.
async fn get_document(
    State(state): State<AppState>,
    user: AuthUser,
    Path(budget_id): Path<Uuid>,
) -> impl IntoResponse {
    let budget = match fetch_owned_budget(&state, budget_id, user.owner_id()).await {
        Ok(budget) => budget,
        Err(response) => return response,
    };

    let item_repo = BudgetItemRepository::new((*state.db).clone());
    let items = match item_repo.list_for_budget(budget_id).await {
        Ok(items) => items,
        Err(e) => {
            error!(error = %e, "Failed to load budget items");
            return internal_error();
        }
    };

    let profile_repo = CompanyProfileRepository::new((*state.db).clone());
    let profile = match profile_repo.find_by_owner(user.owner_id()).await {
        Ok(p) => p.map(|model| CompanyProfile {
            company_name: model.company_name,
            slogan: model.slogan,
            phone: model.phone,
            email: model.email,
            address: model.address,
            logo_key: model.logo_key,
            thank_you_message: model.thank_you_message,
        }),
        Err(e) => {
            error!(error = %e, "Failed to load company profile");
            return internal_error();
        }
    };

    let costs = CostInputs {
        materials_total: budget.materials_total,
        operational_total: budget.operational_total,
        administrative_cost: budget.administrative_cost,
    };
    let totals = BudgetTotals {
        subtotal: budget.subtotal,
        iva: budget.iva,
        grand_total: budget.grand_total,
    };
    if !verify_totals(&costs, &totals) {
        warn!(budget_id = %budget.id, "Stored totals diverge from recomputation");
    }

    let printable = PrintableBudget {
        client_name: budget.client_name,
        costs,
        totals,
    };
    let line_items: Vec<LineItem> = items
        .into_iter()
        .map(|item| LineItem {
            description: item.description,
            quantity: item.quantity,
            unit_price: item.unit_price,
            total: item.total,
        })
        .collect();

    match document::assemble(
        &printable,
        &line_items,
        profile.as_ref(),
        Utc::now().date_naive(),
    ) {
        Ok(tree) => (StatusCode::OK, Json(tree)).into_response(),
        Err(e) => invalid_input(&e.to_string()),
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Fetches a budget, enforcing ownership. The error side carries the ready
/// response: 404 for a missing/foreign budget, 500 for a database failure.
async fn fetch_owned_budget(
    state: &AppState,
    budget_id: Uuid,
    owner_id: Uuid,
) -> Result<budgets::Model, axum::response::Response> {
    let repo = BudgetRepository::new((*state.db).clone());
    repo.find_for_owner(budget_id, owner_id)
        .await
        .map_err(budget_lookup_error)
}

fn budget_lookup_error(err: BudgetError) -> axum::response::Response {
    match err {
        BudgetError::NotFound(_) => not_found(),
        e => {
            error!(error = %e, "Failed to fetch budget");
            internal_error()
        }
    }
}

fn invalid_input(message: &str) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "invalid_input",
            "message": message
        })),
    )
        .into_response()
}

fn not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "not_found",
            "message": "Budget not found"
        })),
    )
        .into_response()
}

fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": "An error occurred"
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn test_missing_budget_maps_to_not_found() {
        let response = budget_lookup_error(BudgetError::NotFound(Uuid::new_v4()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_failure_maps_to_internal_error() {
        let response =
            budget_lookup_error(BudgetError::Database(DbErr::Custom("connection lost".into())));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
