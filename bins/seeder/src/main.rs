//! Database seeder for Cotiza development and testing.
//!
//! Seeds a demo user with one budget, its line items, and a company
//! profile.
//!
//! Usage: cargo run --bin seeder

use rust_decimal_macros::dec;

use cotiza_core::auth::hash_password;
use cotiza_db::repositories::{
    budget::CreateBudgetInput, budget_item::LineItemInput, company_profile::ProfileFields,
};
use cotiza_db::{BudgetItemRepository, BudgetRepository, CompanyProfileRepository, UserRepository};

/// Demo account credentials.
const DEMO_EMAIL: &str = "demo@cotiza.local";
const DEMO_PASSWORD: &str = "demo-password";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = cotiza_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let user_repo = UserRepository::new(db.clone());
    let user = match user_repo.find_by_email(DEMO_EMAIL).await.unwrap() {
        Some(existing) => {
            println!("Demo user already exists, reusing");
            existing
        }
        None => {
            println!("Seeding demo user...");
            let hash = hash_password(DEMO_PASSWORD).expect("Failed to hash password");
            user_repo
                .create(DEMO_EMAIL, &hash)
                .await
                .expect("Failed to create demo user")
        }
    };

    println!("Seeding demo budget...");
    let budget_repo = BudgetRepository::new(db.clone());
    let budget = budget_repo
        .create(
            user.id,
            CreateBudgetInput {
                client_name: "Cliente Demo".to_string(),
                materials_total: dec!(100.00),
                operational_total: dec!(50.00),
                administrative_cost: dec!(10.00),
            },
        )
        .await
        .expect("Failed to create demo budget");

    let item_repo = BudgetItemRepository::new(db.clone());
    item_repo
        .replace_items(
            budget.id,
            vec![
                LineItemInput {
                    description: "Cable".to_string(),
                    quantity: 3,
                    unit_price: dec!(2.50),
                },
                LineItemInput {
                    description: "Enchufe doble".to_string(),
                    quantity: 2,
                    unit_price: dec!(4.00),
                },
            ],
        )
        .await
        .expect("Failed to seed demo items");

    println!("Seeding company profile...");
    let profile_repo = CompanyProfileRepository::new(db.clone());
    profile_repo
        .upsert(
            user.id,
            ProfileFields {
                company_name: Some("Electricidad Demo".to_string()),
                slogan: Some("Instalaciones seguras".to_string()),
                phone: Some("+56 9 1234 5678".to_string()),
                email: Some("contacto@demo.cl".to_string()),
                address: Some("Av. Siempre Viva 742".to_string()),
                thank_you_message: Some("Gracias por su preferencia".to_string()),
            },
            None,
        )
        .await
        .expect("Failed to seed company profile");

    println!("Done. Login with {DEMO_EMAIL} / {DEMO_PASSWORD}");
}
