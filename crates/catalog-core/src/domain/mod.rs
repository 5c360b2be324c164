//! Domain entities and transient request payloads.

pub mod product;
pub mod user;

pub use product::{Product, ProductPayload};
pub use user::{LoginUser, RegisterUser, User};
