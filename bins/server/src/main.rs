//! Cotiza API Server
//!
//! Main entry point for the Cotiza backend service.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cotiza_api::{AppState, create_router};
use cotiza_core::storage::{LogoStore, StorageConfig, StorageProvider};
use cotiza_db::connect;
use cotiza_shared::{AppConfig, JwtConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cotiza=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to database
    let db = connect(&config.database.url).await?;
    info!("Connected to database");

    // Create JWT service
    #[allow(clippy::cast_possible_wrap)]
    let jwt_service = JwtService::new(JwtConfig {
        secret: config.jwt.secret.clone(),
        token_expires_secs: config.jwt.token_expiry_secs as i64,
    });

    // Create logo store
    let provider = match config.storage.backend.as_str() {
        "s3" => StorageProvider::S3 {
            endpoint: config.storage.endpoint.clone(),
            bucket: config.storage.bucket.clone(),
            access_key_id: std::env::var("COTIZA_S3_ACCESS_KEY_ID").unwrap_or_default(),
            secret_access_key: std::env::var("COTIZA_S3_SECRET_ACCESS_KEY").unwrap_or_default(),
            region: config.storage.region.clone(),
        },
        _ => StorageProvider::LocalFs {
            root: PathBuf::from(&config.storage.root),
        },
    };
    let logo_store =
        LogoStore::from_config(&StorageConfig { provider }).context("Failed to init storage")?;
    info!(backend = %config.storage.backend, "Logo store configured");

    // Create application state
    let state = AppState {
        db: Arc::new(db),
        jwt_service: Arc::new(jwt_service),
        logo_store: Arc::new(logo_store),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
