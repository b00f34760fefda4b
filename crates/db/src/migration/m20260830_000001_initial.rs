//! Initial database migration.
//!
//! Creates the users, budgets, budget_items, and company_profiles tables
//! with their indexes.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(USERS_SQL).await?;
        db.execute_unprepared(BUDGETS_SQL).await?;
        db.execute_unprepared(BUDGET_ITEMS_SQL).await?;
        db.execute_unprepared(COMPANY_PROFILES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY,
    email VARCHAR(255) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const BUDGETS_SQL: &str = r"
CREATE TABLE budgets (
    id UUID PRIMARY KEY,
    owner_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    client_name VARCHAR(255) NOT NULL,
    materials_total NUMERIC(12,2) NOT NULL CHECK (materials_total >= 0),
    operational_total NUMERIC(12,2) NOT NULL CHECK (operational_total >= 0),
    administrative_cost NUMERIC(12,2) NOT NULL CHECK (administrative_cost >= 0),
    subtotal NUMERIC(12,2) NOT NULL,
    iva NUMERIC(12,2) NOT NULL,
    grand_total NUMERIC(12,2) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Budgets are listed per owner, newest first
CREATE INDEX idx_budgets_owner_created
    ON budgets(owner_id, created_at DESC);
";

const BUDGET_ITEMS_SQL: &str = r"
CREATE TABLE budget_items (
    id UUID PRIMARY KEY,
    budget_id UUID NOT NULL REFERENCES budgets(id) ON DELETE CASCADE,
    position INTEGER NOT NULL CHECK (position >= 0),
    description TEXT NOT NULL,
    quantity BIGINT NOT NULL CHECK (quantity >= 0),
    unit_price NUMERIC(12,2) NOT NULL CHECK (unit_price >= 0),
    total NUMERIC(12,2) NOT NULL CHECK (total >= 0),
    UNIQUE (budget_id, position)
);

CREATE INDEX idx_budget_items_budget ON budget_items(budget_id);
";

const COMPANY_PROFILES_SQL: &str = r"
CREATE TABLE company_profiles (
    owner_id UUID PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
    company_name VARCHAR(255),
    slogan VARCHAR(255),
    phone VARCHAR(64),
    email VARCHAR(255),
    address VARCHAR(512),
    logo_key VARCHAR(255),
    thank_you_message VARCHAR(512),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS company_profiles;
DROP TABLE IF EXISTS budget_items;
DROP TABLE IF EXISTS budgets;
DROP TABLE IF EXISTS users;
";
