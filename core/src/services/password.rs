//! Password hashing and strength validation.

use crate::errors::{DomainError, ValidationError};

/// Minimum accepted password length
const MIN_PASSWORD_LENGTH: usize = 8;

/// bcrypt-backed password hashing plus the strength rule shared by the
/// registration, change-password and set-password flows.
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl Default for PasswordService {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordService {
    /// Create a service with an explicit bcrypt cost factor.
    ///
    /// Tests use a low cost to keep hashing fast; production uses
    /// [`bcrypt::DEFAULT_COST`].
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password
    pub fn hash(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("password hashing failed: {e}"),
        })
    }

    /// Check a plaintext password against a stored hash
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
            message: format!("password verification failed: {e}"),
        })
    }

    /// Enforce the minimum strength rule: at least 8 characters, with at
    /// least one letter and one digit.
    pub fn validate_strength(&self, password: &str) -> Result<(), DomainError> {
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::WeakPassword {
                reason: format!("must be at least {MIN_PASSWORD_LENGTH} characters"),
            }
            .into());
        }
        if !password.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::WeakPassword {
                reason: "must contain at least one letter".to_string(),
            }
            .into());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::WeakPassword {
                reason: "must contain at least one digit".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PasswordService {
        PasswordService::with_cost(4)
    }

    #[test]
    fn hash_and_verify_round_trip() {
        let passwords = service();
        let hash = passwords.hash("correct horse 1").unwrap();

        assert!(passwords.verify("correct horse 1", &hash).unwrap());
        assert!(!passwords.verify("wrong horse 1", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let passwords = service();
        let a = passwords.hash("same password 1").unwrap();
        let b = passwords.hash("same password 1").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn strength_rule_rejects_short_passwords() {
        assert!(service().validate_strength("ab1").is_err());
    }

    #[test]
    fn strength_rule_requires_letters_and_digits() {
        let passwords = service();
        assert!(passwords.validate_strength("12345678").is_err());
        assert!(passwords.validate_strength("abcdefgh").is_err());
        assert!(passwords.validate_strength("abcdefg1").is_ok());
    }
}
