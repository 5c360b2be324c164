//! # Catalog Shared
//!
//! Shared utilities, types, configuration, and telemetry for the catalog API.

pub mod config;
pub mod constants;
pub mod telemetry;
pub mod types;

pub use types::*;
