//! HTTP handlers for insight-service.

pub mod health;
pub mod insights;

pub use health::{health_check, readiness_check};
pub use insights::get_insights;
