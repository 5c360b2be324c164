//! Domain errors

use catalog_security::password::IdentityError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User locked out")]
    UserLockedOut,

    #[error("Account creation failed")]
    IdentityErrors(Vec<IdentityError>),

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
