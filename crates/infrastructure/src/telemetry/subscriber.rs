//! Subscriber initialization

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (e.g., "info", "nimbus_cli=debug,application=debug")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,

    /// Include the event target (module path) in each line
    #[serde(default)]
    pub with_target: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json: false,
            with_target: false,
        }
    }
}

impl TelemetryConfig {
    /// Filter directive used when `RUST_LOG` is not set
    fn env_filter(&self) -> Result<EnvFilter, TelemetryError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.log_filter)
                .map_err(|e| TelemetryError::InvalidFilter(e.to_string())),
        }
    }
}

/// Install the global tracing subscriber
///
/// Logs go to stderr so command output on stdout stays machine readable.
/// `RUST_LOG` takes precedence over `config.log_filter`.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = config.env_filter()?;

    let fmt_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(config.with_target)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(config.with_target)
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(json = config.json, filter = %config.log_filter, "Telemetry initialized");
    Ok(())
}

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),

    /// The configured filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),
}
