//! User entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email address (unique, stored case-sensitively).
    pub email: String,
    /// Argon2 password hash. Never serialized in any response.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Date of birth (optional).
    pub date_of_birth: Option<NaiveDate>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Date of birth (optional).
    pub date_of_birth: Option<NaiveDate>,
}

/// Data for updating a user's own profile.
///
/// Only non-sensitive fields; email and password changes are outside this
/// operation's contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New full name.
    pub name: Option<String>,
    /// New date of birth.
    pub date_of_birth: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ada Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
        assert!(json.contains("ada@x.com"));
    }
}
