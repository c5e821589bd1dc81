//! service-core: Shared infrastructure for the insight relay services.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
