//! Company profile repository.
//!
//! One profile per owner, upsert semantics. A partial update without a new
//! logo preserves the previously stored logo key (COALESCE).

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Set,
};
use uuid::Uuid;

use crate::entities::company_profiles;

/// Profile fields supplied on upsert.
#[derive(Debug, Clone, Default)]
pub struct ProfileFields {
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
    /// Footer thank-you message.
    pub thank_you_message: Option<String>,
}

/// Company profile repository.
#[derive(Debug, Clone)]
pub struct CompanyProfileRepository {
    db: DatabaseConnection,
}

impl CompanyProfileRepository {
    /// Creates a new company profile repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches an owner's profile; absent profile is `None`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn find_by_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Option<company_profiles::Model>, DbErr> {
        company_profiles::Entity::find_by_id(owner_id)
            .one(&self.db)
            .await
    }

    /// Creates or updates an owner's profile.
    ///
    /// When `new_logo_key` is `None`, an existing stored logo key is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn upsert(
        &self,
        owner_id: Uuid,
        fields: ProfileFields,
        new_logo_key: Option<String>,
    ) -> Result<company_profiles::Model, DbErr> {
        let now = Utc::now().into();

        match self.find_by_owner(owner_id).await? {
            Some(existing) => {
                let logo_key = new_logo_key.or_else(|| existing.logo_key.clone());
                let mut model = existing.into_active_model();
                model.company_name = Set(fields.company_name);
                model.slogan = Set(fields.slogan);
                model.phone = Set(fields.phone);
                model.email = Set(fields.email);
                model.address = Set(fields.address);
                model.logo_key = Set(logo_key);
                model.thank_you_message = Set(fields.thank_you_message);
                model.updated_at = Set(now);
                model.update(&self.db).await
            }
            None => {
                let model = company_profiles::ActiveModel {
                    owner_id: Set(owner_id),
                    company_name: Set(fields.company_name),
                    slogan: Set(fields.slogan),
                    phone: Set(fields.phone),
                    email: Set(fields.email),
                    address: Set(fields.address),
                    logo_key: Set(new_logo_key),
                    thank_you_message: Set(fields.thank_you_message),
                    updated_at: Set(now),
                };
                model.insert(&self.db).await
            }
        }
    }
}
