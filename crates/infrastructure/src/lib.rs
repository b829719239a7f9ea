//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the Open-Meteo and Gemini adapters, the rain alert channel,
//! layered configuration and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ConfigError, OutfitConfig, PreferencesConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
