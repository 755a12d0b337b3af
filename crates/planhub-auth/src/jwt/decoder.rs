//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use planhub_core::config::AuthConfig;
use planhub_core::error::AppError;

use super::claims::Claims;

/// Validates bearer tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        if config.jwt_secret.is_empty() {
            return Err(AppError::configuration(
                "Cannot create token decoder with an empty signing secret",
            ));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        })
    }

    /// Decodes and validates a token string, returning its claims.
    ///
    /// Malformed tokens, signature mismatches, and expired tokens all
    /// collapse into a single `Unauthorized` outcome for the caller; the
    /// distinct cause is kept in the debug log.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        debug!("Token rejected: expired");
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        debug!("Token rejected: signature mismatch");
                    }
                    other => {
                        debug!("Token rejected: {:?}", other);
                    }
                }
                AppError::unauthorized("Invalid or expired token")
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Duration;
    use uuid::Uuid;

    fn config_with_secret(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_round_trip_resolves_subject() {
        let config = config_with_secret("test_secret_a");
        let encoder = JwtEncoder::new(&config).unwrap();
        let decoder = JwtDecoder::new(&config).unwrap();

        let subject = Uuid::new_v4();
        let issued = encoder.issue(subject, "ada@x.com").unwrap();
        let claims = decoder.verify(&issued.token).unwrap();

        assert_eq!(claims.sub, subject);
        assert_eq!(claims.email, "ada@x.com");
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = config_with_secret("test_secret_a");
        let encoder = JwtEncoder::new(&config).unwrap();
        let decoder = JwtDecoder::new(&config).unwrap();

        let issued = encoder
            .issue_with_ttl(Uuid::new_v4(), "ada@x.com", Duration::minutes(-5))
            .unwrap();

        assert!(decoder.verify(&issued.token).is_err());
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let encoder = JwtEncoder::new(&config_with_secret("secret_one")).unwrap();
        let decoder = JwtDecoder::new(&config_with_secret("secret_two")).unwrap();

        let issued = encoder.issue(Uuid::new_v4(), "ada@x.com").unwrap();
        let err = decoder.verify(&issued.token).unwrap_err();
        assert_eq!(err.kind, planhub_core::error::ErrorKind::Unauthorized);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let decoder = JwtDecoder::new(&config_with_secret("test_secret_a")).unwrap();
        assert!(decoder.verify("not-a-token").is_err());
        assert!(decoder.verify("").is_err());
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(JwtDecoder::new(&config_with_secret("")).is_err());
    }
}
