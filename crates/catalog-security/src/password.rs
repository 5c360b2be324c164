//! Password hashing with Argon2 and the account-provider password policy

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::Serialize;
use thiserror::Error;

use catalog_shared::constants::MIN_PASSWORD_LENGTH;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Hash error: {0}")]
    HashError(String),
    #[error("Verification failed")]
    VerificationFailed,
}

/// One failed policy rule, in the `{code, description}` shape account
/// providers report creation failures with.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IdentityError {
    pub code: String,
    pub description: String,
}

impl IdentityError {
    pub fn new(code: &str, description: String) -> Self {
        Self {
            code: code.to_string(),
            description,
        }
    }
}

pub struct PasswordService;

impl PasswordService {
    pub fn hash(password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| PasswordError::HashError(e.to_string()))
    }

    pub fn verify(password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| PasswordError::HashError(e.to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Check a candidate password against the registration policy. Returns
    /// every rule it breaks, empty when the password is acceptable.
    pub fn check_policy(password: &str) -> Vec<IdentityError> {
        let mut errors = Vec::new();

        if password.len() < MIN_PASSWORD_LENGTH {
            errors.push(IdentityError::new(
                "PasswordTooShort",
                format!("Passwords must be at least {} characters.", MIN_PASSWORD_LENGTH),
            ));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            errors.push(IdentityError::new(
                "PasswordRequiresDigit",
                "Passwords must have at least one digit ('0'-'9').".to_string(),
            ));
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            errors.push(IdentityError::new(
                "PasswordRequiresLower",
                "Passwords must have at least one lowercase ('a'-'z').".to_string(),
            ));
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            errors.push(IdentityError::new(
                "PasswordRequiresUpper",
                "Passwords must have at least one uppercase ('A'-'Z').".to_string(),
            ));
        }
        if password.chars().all(|c| c.is_ascii_alphanumeric()) {
            errors.push(IdentityError::new(
                "PasswordRequiresNonAlphanumeric",
                "Passwords must have at least one non alphanumeric character.".to_string(),
            ));
        }

        errors
    }
}
