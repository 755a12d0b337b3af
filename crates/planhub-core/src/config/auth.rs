//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The non-secure fallback signing secret shipped for development.
pub const DEFAULT_JWT_SECRET: &str = "planhub_dev_secret_change_me";

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token TTL in minutes. The original system shipped surfaces with both
    /// 1-hour and 7-day policies; which applies is a deployment choice.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_minutes: default_token_ttl(),
            password_min_length: default_password_min(),
        }
    }
}

impl AuthConfig {
    /// Whether the signing secret is still the shipped fallback.
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }

    /// Validate the auth section.
    ///
    /// An empty secret must never silently produce verifiable tokens
    /// signed with an empty key.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.is_empty() {
            return Err(AppError::configuration(
                "auth.jwt_secret is empty; refusing to sign tokens with an empty key",
            ));
        }

        if self.uses_default_secret() {
            tracing::warn!(
                "auth.jwt_secret is the shipped default; unsuitable for production deployments"
            );
        }

        Ok(())
    }
}

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_token_ttl() -> u64 {
    // 7 days, matching the mounted login surface of the original system.
    7 * 24 * 60
}

fn default_password_min() -> usize {
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_secret_flagged_but_accepted() {
        let config = AuthConfig::default();
        assert!(config.uses_default_secret());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_secret_rejected() {
        let config = AuthConfig {
            jwt_secret: String::new(),
            ..AuthConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_ttl_is_seven_days() {
        assert_eq!(AuthConfig::default().token_ttl_minutes, 10080);
    }
}
