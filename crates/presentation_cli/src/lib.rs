//! Presentation layer - Terminal front end
//!
//! Argument parsing, dashboard rendering and the interactive session used by
//! the `nimbus-cli` binary.

pub mod app;
pub mod cli;
pub mod render;
pub mod session;

pub use app::{Overrides, build_controller, load_weather};
pub use cli::{Cli, Commands, SelectionArgs, log_filter_from_verbosity};
pub use session::{CommandError, Session, SessionCommand};
