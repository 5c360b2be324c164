//! Repository traits (ports)

pub mod product_repository;
pub mod user_repository;

pub use product_repository::ProductRepository;
pub use user_repository::UserRepository;
