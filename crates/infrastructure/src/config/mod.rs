//! Application configuration
//!
//! Split into focused sub-modules:
//! - `outfit`: generative AI credential
//! - `preferences`: startup city, units, theme and rain alerts
//!
//! Sources are layered: built-in defaults, then an optional TOML file, then
//! `NIMBUS_<SECTION>__<KEY>` environment variables.

mod outfit;
mod preferences;

use std::path::Path;

use ai_core::InferenceConfig;
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use outfit::{GEMINI_API_KEY_VAR, OutfitConfig};
pub use preferences::PreferencesConfig;

use crate::telemetry::TelemetryConfig;

/// File searched in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "nimbus";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "NIMBUS";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Loading or deserializing a source failed
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Rendering the effective configuration failed
    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Forecast provider settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Generative model settings
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Outfit suggestion credential
    #[serde(default)]
    pub outfit: OutfitConfig,

    /// Startup preferences
    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from defaults, a file and the environment
    ///
    /// With `path` set the file must exist; otherwise `nimbus.toml` in the
    /// working directory is used if present. A missing API key falls back to
    /// `GEMINI_API_KEY`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::load_with_env(path, |var| std::env::var(var).ok())?;
        debug!(
            file = ?path,
            outfit_configured = config.outfit.is_configured(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Load with an explicit lookup for the API key fallback
    pub fn load_with_env(
        path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("weather.base_url", WeatherConfig::default().base_url)?
            .set_default("inference.default_model", InferenceConfig::default().default_model)?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., NIMBUS_PREFERENCES__UNIT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.outfit.apply_key_fallback(lookup);
        Ok(config)
    }

    /// Effective configuration as TOML, without secrets
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
