//! User-adjustable display preferences

use serde::{Deserialize, Serialize};

use crate::value_objects::{Theme, UnitPreference};

/// Preferences held by the controller
///
/// Only `unit` affects what is fetched. `theme` is consumed by the
/// renderer and `rain_notification` gates rain alerts after each fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppPreferences {
    #[serde(default)]
    pub unit: UnitPreference,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub rain_notification: bool,
}

impl AppPreferences {
    /// Create preferences with the given unit and defaults elsewhere
    #[must_use]
    pub fn with_unit(unit: UnitPreference) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let prefs = AppPreferences::default();
        assert_eq!(prefs.unit, UnitPreference::Metric);
        assert_eq!(prefs.theme, Theme::Light);
        assert!(!prefs.rain_notification);
    }

    #[test]
    fn with_unit_keeps_other_defaults() {
        let prefs = AppPreferences::with_unit(UnitPreference::Imperial);
        assert_eq!(prefs.unit, UnitPreference::Imperial);
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn deserializes_partial_input() {
        let prefs: AppPreferences = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.unit, UnitPreference::Metric);
    }
}
