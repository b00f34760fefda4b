//! Company profile routes.
//!
//! The profile is upserted from a multipart form so the logo file can ride
//! along with the text fields; when no logo part is present the stored logo
//! is preserved.

use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, put},
};
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, middleware::AuthUser};
use cotiza_core::storage::{StorageError, content_type_for};
use cotiza_db::{CompanyProfileRepository, repositories::company_profile::ProfileFields};

/// Creates the company profile routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/company", get(get_profile))
        .route("/company", put(upsert_profile))
        .route("/company/logo", get(get_logo))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Response for a company profile.
#[derive(Debug, Default, Serialize)]
pub struct ProfileResponse {
    /// Company display name.
    pub company_name: Option<String>,
    /// Company slogan.
    pub slogan: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// Stored logo key.
    pub logo_key: Option<String>,
    /// Footer thank-you message.
    pub thank_you_message: Option<String>,
}

impl From<cotiza_db::entities::company_profiles::Model> for ProfileResponse {
    fn from(model: cotiza_db::entities::company_profiles::Model) -> Self {
        Self {
            company_name: model.company_name,
            slogan: model.slogan,
            phone: model.phone,
            email: model.email,
            address: model.address,
            logo_key: model.logo_key,
            thank_you_message: model.thank_you_message,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /company - Fetch the caller's profile; empty object when absent.
async fn get_profile(State(state): State<AppState>, user: AuthUser) -> impl IntoResponse {
    let repo = CompanyProfileRepository::new((*state.db).clone());

    match repo.find_by_owner(user.owner_id()).await {
        Ok(Some(profile)) => (StatusCode::OK, Json(ProfileResponse::from(profile))).into_response(),
        Ok(None) => (StatusCode::OK, Json(ProfileResponse::default())).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to load company profile");
            internal_error()
        }
    }
}

/// PUT /company - Upsert the profile from a multipart form.
async fn upsert_profile(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut fields = ProfileFields::default();
    let mut logo: Option<(String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return invalid_input(&format!("malformed multipart body: {e}"));
            }
        };

        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };

        if name == "logo" {
            let content_type = field.content_type().unwrap_or_default().to_string();
            match field.bytes().await {
                Ok(bytes) => logo = Some((content_type, bytes.to_vec())),
                Err(e) => return invalid_input(&format!("failed to read logo: {e}")),
            }
            continue;
        }

        let value = match field.text().await {
            Ok(text) => Some(text).filter(|t| !t.trim().is_empty()),
            Err(e) => return invalid_input(&format!("failed to read field {name}: {e}")),
        };

        match name.as_str() {
            "company_name" => fields.company_name = value,
            "slogan" => fields.slogan = value,
            "phone" => fields.phone = value,
            "email" => fields.email = value,
            "address" => fields.address = value,
            "thank_you_message" => fields.thank_you_message = value,
            _ => {}
        }
    }

    // Store the logo first so the profile row only ever references an
    // asset that exists.
    let new_logo_key = match logo {
        Some((content_type, bytes)) => {
            match state
                .logo_store
                .put_logo(user.owner_id(), &content_type, bytes)
                .await
            {
                Ok(key) => Some(key),
                Err(e @ (StorageError::UnsupportedContentType(_) | StorageError::TooLarge { .. })) => {
                    return invalid_input(&e.to_string());
                }
                Err(e) => {
                    error!(error = %e, "Failed to store logo");
                    return internal_error();
                }
            }
        }
        None => None,
    };

    let repo = CompanyProfileRepository::new((*state.db).clone());
    match repo.upsert(user.owner_id(), fields, new_logo_key).await {
        Ok(profile) => {
            info!(owner_id = %user.owner_id(), "Company profile saved");
            (StatusCode::OK, Json(ProfileResponse::from(profile))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to upsert company profile");
            internal_error()
        }
    }
}

/// GET /company/logo - Stream the stored logo bytes.
async fn get_logo(State(state): State<AppState>, user: AuthUser) -> impl IntoResponse {
    let repo = CompanyProfileRepository::new((*state.db).clone());

    let logo_key = match repo.find_by_owner(user.owner_id()).await {
        Ok(Some(profile)) => profile.logo_key,
        Ok(None) => None,
        Err(e) => {
            error!(error = %e, "Failed to load company profile");
            return internal_error();
        }
    };

    let Some(key) = logo_key else {
        return logo_not_found(user.owner_id());
    };

    match state.logo_store.read(&key).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type_for(&key))],
            bytes,
        )
            .into_response(),
        Err(StorageError::NotFound(_)) => logo_not_found(user.owner_id()),
        Err(e) => {
            error!(error = %e, "Failed to read logo");
            internal_error()
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn logo_not_found(owner_id: Uuid) -> axum::response::Response {
    info!(owner_id = %owner_id, "Logo requested but none stored");
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "not_found",
            "message": "No logo uploaded"
        })),
    )
        .into_response()
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
