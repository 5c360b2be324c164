//! Product repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Product;
use crate::error::DomainError;

/// Mutating operations report rows affected so callers can tell a no-op write
/// apart from a successful one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Product>, DomainError>;
    async fn create(&self, product: &Product) -> Result<u64, DomainError>;
    async fn update(&self, product: &Product) -> Result<u64, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError>;
}
