// HTTP routes
pub mod health;
pub mod me;
pub mod preview;

pub use health::*;
pub use me::*;
pub use preview::*;
