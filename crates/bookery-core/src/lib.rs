//! Shared ambient concerns for bookery services.

pub mod health;
pub mod serde;
pub mod tracing;
