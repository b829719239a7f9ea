//! Wiring of adapters and the controller from configuration

use std::sync::Arc;

use anyhow::Context;
use application::{FetchOutcome, OutfitService, RainAlert, WeatherController};
use domain::{Theme, UnitPreference, find_city};
use infrastructure::{AppConfig, ChannelNotificationAdapter, GeminiInferenceAdapter, WeatherAdapter};
use tokio::sync::mpsc;
use tracing::debug;

/// Command-line overrides applied on top of the configured preferences
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub city: Option<String>,
    pub unit: Option<UnitPreference>,
    pub theme: Option<Theme>,
}

/// Build a controller and the receiver for its rain alerts
///
/// No fetch is issued.
///
/// # Errors
///
/// Returns an error if the selected city is not in the catalog or an HTTP
/// client cannot be created.
pub fn build_controller(
    config: &AppConfig,
    overrides: &Overrides,
) -> anyhow::Result<(Arc<WeatherController>, mpsc::Receiver<RainAlert>)> {
    let city = match &overrides.city {
        Some(name) => find_city(name)?,
        None => config
            .preferences
            .resolve_city()
            .context("Invalid default city in configuration")?,
    };

    let mut preferences = config.preferences.app_preferences();
    if let Some(unit) = overrides.unit {
        preferences.unit = unit;
    }
    if let Some(theme) = overrides.theme {
        preferences.theme = theme;
    }

    let weather = Arc::new(WeatherAdapter::with_config(config.weather.clone())?);
    let outfit = OutfitService::from_option(GeminiInferenceAdapter::from_config(config)?);
    let (notifier, alerts) = ChannelNotificationAdapter::with_default_capacity();

    debug!(
        city = city.name,
        unit = %preferences.unit,
        outfit_configured = outfit.is_configured(),
        "Building controller"
    );

    let controller = WeatherController::new(weather, outfit, city, preferences)
        .with_notifier(Arc::new(notifier))
        .with_rain_threshold(config.preferences.rain_threshold());

    Ok((Arc::new(controller), alerts))
}

/// Run a fetch for the current selection and wait for it
///
/// # Errors
///
/// Returns an error if the fetch fails or its task panics.
pub async fn load_weather(controller: &Arc<WeatherController>) -> anyhow::Result<()> {
    let ticket = controller.refresh();
    if let FetchOutcome::Failed(error) = controller.spawn(ticket).await? {
        anyhow::bail!("Weather fetch failed: {error}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_configured_preferences() {
        let mut config = AppConfig::default();
        config.preferences.default_city = "paris".to_string();
        config.preferences.unit = UnitPreference::Imperial;
        config.preferences.rain_notification = true;

        let (controller, _alerts) = build_controller(&config, &Overrides::default()).unwrap();
        let state = controller.state();

        assert_eq!(state.selected_city.name, "Paris");
        assert_eq!(state.preferences.unit, UnitPreference::Imperial);
        assert!(state.preferences.rain_notification);
        assert!(state.snapshot.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn overrides_win() {
        let overrides = Overrides {
            city: Some("Sydney".to_string()),
            unit: Some(UnitPreference::Imperial),
            theme: Some(Theme::Dark),
        };

        let (controller, _alerts) = build_controller(&AppConfig::default(), &overrides).unwrap();
        let state = controller.state();

        assert_eq!(state.selected_city.name, "Sydney");
        assert_eq!(state.preferences.unit, UnitPreference::Imperial);
        assert_eq!(state.preferences.theme, Theme::Dark);
    }

    #[test]
    fn unknown_city_is_an_error() {
        let overrides = Overrides {
            city: Some("Atlantis".to_string()),
            ..Default::default()
        };
        assert!(build_controller(&AppConfig::default(), &overrides).is_err());
    }

    #[tokio::test]
    async fn failed_initial_load_is_an_error() {
        let mut config = AppConfig::default();
        config.weather.base_url = "http://127.0.0.1:1/v1".to_string();
        config.weather.timeout_secs = 1;

        let (controller, _alerts) = build_controller(&config, &Overrides::default()).unwrap();
        let err = load_weather(&controller).await.unwrap_err();

        assert!(err.to_string().starts_with("Weather fetch failed"));
        let state = controller.state();
        assert!(!state.loading);
        assert!(state.last_error.is_some());
    }

    #[test]
    fn unknown_default_city_is_an_error() {
        let mut config = AppConfig::default();
        config.preferences.default_city = "Gotham".to_string();
        assert!(build_controller(&config, &Overrides::default()).is_err());
    }
}
