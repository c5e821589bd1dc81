pub mod insight;
pub mod providers;

pub use insight::{generate_insight, SYSTEM_PROMPT};
