//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use planhub_entity::project::Project;
use planhub_entity::user::User;

/// User summary for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            date_of_birth: user.date_of_birth,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Signup/login response: a bearer token plus the user it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Outcome message.
    pub message: String,
    /// Signed bearer token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
}

/// Message plus updated user, for profile updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnvelope {
    /// Outcome message.
    pub message: String,
    /// The updated user.
    pub user: UserResponse,
}

/// Message plus project, for project mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEnvelope {
    /// Outcome message.
    pub message: String,
    /// The affected project.
    pub project: Project,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_has_no_password_field() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ada Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            password_hash: "$argon2id$v=19$hidden".to_string(),
            date_of_birth: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(!json.to_lowercase().contains("password"));
        assert!(!json.contains("argon2id"));
    }
}
