// Common types and utilities shared across the application

pub mod auth;
pub mod pii;

pub use auth::{AuthError, Role};
pub use pii::{EntityType, Record};
