//! Password policy enforcement for new passwords.

use habitflow_core::config::auth::AuthConfig;
use habitflow_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
    /// Minimum zxcvbn score (0-4).
    min_score: u8,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            min_score: config.password_min_score.min(4),
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        let estimate = zxcvbn::zxcvbn(password, &[]);
        if u8::from(estimate.score()) < self.min_score {
            return Err(AppError::validation(
                "Password is too weak. Please use a longer or less predictable password.",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator {
            min_length: 8,
            min_score: 2,
        }
    }

    #[test]
    fn test_rejects_short_password() {
        let err = validator().validate("Ab1!").unwrap_err();
        assert!(err.message.contains("at least 8"));
    }

    #[test]
    fn test_rejects_weak_password() {
        assert!(validator().validate("password").is_err());
    }

    #[test]
    fn test_accepts_strong_password() {
        assert!(validator().validate("tr4verse-Kyoto-lamp").is_ok());
    }
}
