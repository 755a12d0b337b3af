//! Registration and login flows.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use validator::ValidateEmail;

use planhub_auth::jwt::encoder::{IssuedToken, JwtEncoder};
use planhub_auth::password::{PasswordHasher, PasswordValidator};
use planhub_core::error::AppError;
use planhub_database::repositories::user::UserRepository;
use planhub_entity::user::{CreateUser, User};

/// Handles credential registration and authentication.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
}

/// Input for registering a new user.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Registration {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Date of birth as `YYYY-MM-DD`.
    pub date_of_birth: String,
}

/// Result of a successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthSuccess {
    /// The user record (password hash never serialized).
    pub user: User,
    /// The issued bearer token.
    pub token: IssuedToken,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
        }
    }

    /// Registers a new user and issues a token for the created account.
    ///
    /// All fields are validated before any store access; a duplicate email
    /// is a conflict and leaves no partial record behind.
    pub async fn register(&self, registration: Registration) -> Result<AuthSuccess, AppError> {
        let name = registration.name.trim().to_string();
        let email = registration.email.trim().to_string();
        let password = registration.password.trim().to_string();
        let date_of_birth = registration.date_of_birth.trim().to_string();

        if name.is_empty() || email.is_empty() || password.is_empty() || date_of_birth.is_empty() {
            return Err(AppError::validation("All fields are required"));
        }

        validate_name(&name)?;

        if !email.validate_email() {
            return Err(AppError::validation("Invalid email format"));
        }

        let date_of_birth = parse_birth_date(&date_of_birth)?;

        self.validator.validate(&password)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email already exists"));
        }

        let password_hash = self.hasher.hash_password(&password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                name,
                email,
                password_hash,
                date_of_birth: Some(date_of_birth),
            })
            .await?;

        let token = self.encoder.issue(user.id, &user.email)?;

        info!(user_id = %user.id, "User registered");

        Ok(AuthSuccess { user, token })
    }

    /// Authenticates a user by email and password, issuing a token.
    ///
    /// An unknown email and a wrong password produce the identical error so
    /// that responses cannot be used as an account-existence oracle.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<AuthSuccess, AppError> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::validation("Email and password are required"));
        }

        let user = match self.user_repo.find_by_email(email).await? {
            Some(user) => user,
            None => return Err(invalid_credentials()),
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(invalid_credentials());
        }

        let token = self.encoder.issue(user.id, &user.email)?;

        info!(user_id = %user.id, "User signed in");

        Ok(AuthSuccess { user, token })
    }
}

/// The single error shape for both unknown-email and wrong-password.
fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid credentials")
}

/// Names may only contain letters and spaces.
pub(crate) fn validate_name(name: &str) -> Result<(), AppError> {
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err(AppError::validation("Name can only contain letters"));
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` date of birth.
pub(crate) fn parse_birth_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::validation("Invalid date of birth"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use planhub_core::error::ErrorKind;

    #[test]
    fn test_name_must_be_alphabetic() {
        assert!(validate_name("Ada Lovelace").is_ok());
        assert!(validate_name("Ada L0velace").is_err());
        assert!(validate_name("Ada-Lovelace").is_err());
    }

    #[test]
    fn test_birth_date_parsing() {
        assert_eq!(
            parse_birth_date("1990-01-01").unwrap(),
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
        );
        assert!(parse_birth_date("01/01/1990").is_err());
        assert!(parse_birth_date("not-a-date").is_err());
    }

    #[test]
    fn test_invalid_credentials_is_unauthorized() {
        let err = invalid_credentials();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.message, "Invalid credentials");
    }
}
