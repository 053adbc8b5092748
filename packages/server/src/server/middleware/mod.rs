// HTTP middleware
pub mod role_auth;

pub use role_auth::*;
