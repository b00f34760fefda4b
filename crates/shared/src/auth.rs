//! Authentication types for JWT claims and auth payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (owner identity ID).
    pub sub: Uuid,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for an owner identity.
    #[must_use]
    pub fn new(owner_id: Uuid, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: owner_id,
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the owner identity ID from the claims.
    #[must_use]
    pub const fn owner_id(&self) -> Uuid {
        self.sub
    }
}

/// Login request payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// User email.
    #[validate(email)]
    pub email: String,
    /// User password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Registration request payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// User email.
    #[validate(email)]
    pub email: String,
    /// User password.
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// Login response payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Authenticated user info.
    pub user: UserInfo,
    /// Access token.
    pub access_token: String,
    /// Token expiration in seconds.
    pub expires_in: i64,
}

/// User info returned in auth responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    /// User ID.
    pub id: Uuid,
    /// User email.
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_claims_owner_id() {
        let owner_id = Uuid::new_v4();
        let claims = Claims::new(owner_id, Utc::now() + Duration::hours(1));
        assert_eq!(claims.owner_id(), owner_id);
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let req = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "long-enough-password".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_short_password() {
        let req = RegisterRequest {
            email: "user@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
