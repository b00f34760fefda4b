//! User repository for identity records.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::users;

/// Error types for user operations.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    /// An account with this email already exists.
    #[error("email already registered")]
    DuplicateEmail,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// User repository for identity CRUD.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user with an already-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `UserError::DuplicateEmail` if the email is taken.
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<users::Model, UserError> {
        if self.email_exists(email).await? {
            return Err(UserError::DuplicateEmail);
        }

        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_lowercase()),
            password_hash: Set(password_hash.to_string()),
            created_at: Set(Utc::now().into()),
        };

        Ok(user.insert(&self.db).await?)
    }

    /// Finds a user by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email.to_lowercase()))
            .one(&self.db)
            .await
    }

    /// Returns true if a user with this email exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
