//! Startup preferences: initial city, units, theme and rain alerts.

use application::DEFAULT_RAIN_ALERT_THRESHOLD;
use domain::{AppPreferences, City, DomainError, Percentage, Theme, UnitPreference, find_city};
use serde::{Deserialize, Serialize};

/// Initial controller state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// Catalog name of the city selected at startup
    #[serde(default = "default_city")]
    pub default_city: String,

    #[serde(default)]
    pub unit: UnitPreference,

    #[serde(default)]
    pub theme: Theme,

    /// Whether rain alerts start enabled
    #[serde(default)]
    pub rain_notification: bool,

    /// Precipitation probability (0-100) at which a rain alert fires
    #[serde(default = "default_rain_alert_threshold")]
    pub rain_alert_threshold: u8,
}

fn default_city() -> String {
    City::default_city().name.to_string()
}

const fn default_rain_alert_threshold() -> u8 {
    DEFAULT_RAIN_ALERT_THRESHOLD
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            default_city: default_city(),
            unit: UnitPreference::default(),
            theme: Theme::default(),
            rain_notification: false,
            rain_alert_threshold: default_rain_alert_threshold(),
        }
    }
}

impl PreferencesConfig {
    /// Look up the configured startup city in the catalog
    pub fn resolve_city(&self) -> Result<City, DomainError> {
        find_city(&self.default_city)
    }

    #[must_use]
    pub const fn app_preferences(&self) -> AppPreferences {
        AppPreferences {
            unit: self.unit,
            theme: self.theme,
            rain_notification: self.rain_notification,
        }
    }

    /// Threshold as a percentage, clamped to 100
    #[must_use]
    pub const fn rain_threshold(&self) -> Percentage {
        Percentage::clamped(self.rain_alert_threshold)
    }
}
