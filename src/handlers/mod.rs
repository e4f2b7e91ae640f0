//! HTTP handlers for tickets and the root liveness placeholder.

pub mod root;
pub mod ticket;
pub use root::*;
pub use ticket::*;
