//! Tracing subscriber setup
//!
//! Console logging through `tracing-subscriber`, either human readable or
//! JSON, filtered by `RUST_LOG` or the configured filter.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, init_telemetry};
