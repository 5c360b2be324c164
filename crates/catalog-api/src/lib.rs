//! # Catalog API
//!
//! HTTP handlers, bearer-token middleware, and router assembly.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
