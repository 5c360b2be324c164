//! PostgreSQL repository implementations

pub mod product_repo_impl;
pub mod user_repo_impl;

pub use product_repo_impl::PgProductRepository;
pub use user_repo_impl::PgUserRepository;
