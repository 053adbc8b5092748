// Atlas - API Core
//
// Case management for a trap-neuter-return program. Contact details in
// person, request, submission and appointment records are masked before
// they are served to volunteers.

pub mod common;
pub mod config;
pub mod server;

pub use config::*;
