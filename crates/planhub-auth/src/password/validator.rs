//! Password policy enforcement for new passwords.

use planhub_core::config::AuthConfig;
use planhub_core::error::AppError;

/// Validates password strength against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against the policy.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_enforced() {
        let validator = PasswordValidator::new(&AuthConfig::default());
        assert!(validator.validate("short").is_err());
        assert!(validator.validate("longenough1").is_ok());
    }

    #[test]
    fn test_boundary_length() {
        let validator = PasswordValidator::new(&AuthConfig::default());
        assert!(validator.validate("1234567").is_err());
        assert!(validator.validate("12345678").is_ok());
    }
}
