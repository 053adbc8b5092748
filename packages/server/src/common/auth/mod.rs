//! Authorization roles for Atlas
//!
//! The role itself is resolved upstream (session or auth proxy); this module
//! only names the roles and the errors raised when one can't be resolved.
//!
//! ```rust
//! use atlas_core::common::auth::Role;
//!
//! let role: Role = "volunteer".parse().unwrap();
//! assert!(!role.sees_unmasked_pii());
//! ```

mod errors;
mod role;

pub use errors::AuthError;
pub use role::Role;
