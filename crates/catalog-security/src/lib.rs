//! # Catalog Security
//!
//! Security utilities: JWT issuance/validation and password hashing.

pub mod jwt;
pub mod password;

pub use jwt::TokenIssuer;
pub use password::PasswordService;
