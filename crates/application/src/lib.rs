//! Application layer - Use cases and orchestration
//!
//! Contains the weather controller that owns the display state, the outfit
//! suggestion service and the port definitions implemented by
//! infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
