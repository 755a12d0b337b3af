//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use planhub_core::config::AuthConfig;
use planhub_core::error::AppError;

use super::claims::Claims;

/// Creates signed bearer tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in minutes.
    ttl_minutes: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

/// Result of a successful token issuance.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// The signed bearer token.
    pub token: String,
    /// Absolute expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// An empty secret is a deployment error: it would produce
    /// verifiable-but-insecure tokens signed with an empty key.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        if config.jwt_secret.is_empty() {
            return Err(AppError::configuration(
                "Cannot create token encoder with an empty signing secret",
            ));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_minutes: config.token_ttl_minutes as i64,
        })
    }

    /// Issues a token for the given subject with the configured TTL.
    pub fn issue(&self, subject: Uuid, email: &str) -> Result<IssuedToken, AppError> {
        self.issue_with_ttl(subject, email, Duration::minutes(self.ttl_minutes))
    }

    /// Issues a token for the given subject with an explicit TTL.
    pub fn issue_with_ttl(
        &self,
        subject: Uuid,
        email: &str,
        ttl: Duration,
    ) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + ttl;

        let claims = Claims {
            sub: subject,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_rejected() {
        let config = AuthConfig {
            jwt_secret: String::new(),
            ..AuthConfig::default()
        };
        assert!(JwtEncoder::new(&config).is_err());
    }

    #[test]
    fn test_issue_sets_absolute_expiry() {
        let encoder = JwtEncoder::new(&AuthConfig::default()).unwrap();
        let before = Utc::now();
        let issued = encoder.issue(Uuid::new_v4(), "ada@x.com").unwrap();

        let expected = before + Duration::minutes(10080);
        let drift = (issued.expires_at - expected).num_seconds().abs();
        assert!(drift <= 5, "expiry drifted {drift}s from issue-time + ttl");
        assert!(!issued.token.is_empty());
    }

    #[test]
    fn test_tokens_differ_per_issue() {
        let encoder = JwtEncoder::new(&AuthConfig::default()).unwrap();
        let subject = Uuid::new_v4();
        let a = encoder
            .issue_with_ttl(subject, "ada@x.com", Duration::minutes(1))
            .unwrap();
        let b = encoder
            .issue_with_ttl(subject, "ada@x.com", Duration::minutes(2))
            .unwrap();
        assert_ne!(a.token, b.token);
    }
}
