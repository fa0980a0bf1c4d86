//! Password policy enforcement for new passwords.

use palaver_core::config::security::SecurityConfig;
use palaver_core::error::AppError;

/// Validates password strength against configured policies at registration
/// and password change.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Minimum password length.
    min_length: usize,
    /// Minimum zxcvbn score (0-4).
    min_score: u8,
}

impl PasswordPolicy {
    /// Creates a new policy from security configuration.
    pub fn new(config: &SecurityConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            min_score: config.password_min_score,
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
        if estimate.score() < min_score(self.min_score) {
            return Err(AppError::validation(
                "Password is too weak. Please use a longer or less predictable password.",
            ));
        }

        Ok(())
    }
}

fn min_score(configured: u8) -> zxcvbn::Score {
    match configured {
        0 => zxcvbn::Score::Zero,
        1 => zxcvbn::Score::One,
        2 => zxcvbn::Score::Two,
        3 => zxcvbn::Score::Three,
        _ => zxcvbn::Score::Four,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> PasswordPolicy {
        PasswordPolicy::new(&SecurityConfig::default())
    }

    #[test]
    fn rejects_short_password() {
        let err = policy().validate("abc").unwrap_err();
        assert!(err.message.contains("at least"));
    }

    #[test]
    fn rejects_weak_password() {
        assert!(policy().validate("password").is_err());
        assert!(policy().validate("12345678").is_err());
    }

    #[test]
    fn accepts_strong_password() {
        assert!(policy().validate("kelp9!Trombone-vista").is_ok());
    }
}
