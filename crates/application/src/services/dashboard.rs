//! Dashboard presentation model
//!
//! Flattens a [`ControllerState`] into the values a front end shows:
//! rounded temperatures, icon, condition text and one row per forecast day.

use chrono::{Datelike, NaiveDate, Weekday};
use domain::{Percentage, Theme, UnitPreference, WeatherIcon};
use serde::Serialize;

use crate::services::weather_controller::ControllerState;

/// Current conditions ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentView {
    pub temperature: i64,
    pub temperature_unit: String,
    pub description: &'static str,
    pub icon: WeatherIcon,
    pub humidity: Percentage,
    pub wind_speed: String,
    pub wind_unit: String,
    pub precipitation_probability: Percentage,
}

/// One day of the outlook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRow {
    /// "Today" for the first row, the full weekday name otherwise
    pub label: String,
    pub date: NaiveDate,
    pub icon: WeatherIcon,
    pub description: &'static str,
    pub high: i64,
    pub low: i64,
    pub precipitation_probability: Option<Percentage>,
}

/// Everything the dashboard renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub city: String,
    pub country: &'static str,
    /// City of the displayed forecast when it is not the selected one
    pub forecast_city: Option<String>,
    pub unit: UnitPreference,
    pub theme: Theme,
    pub rain_notification: bool,
    pub loading: bool,
    pub stale: bool,
    pub error: Option<String>,
    pub current: Option<CurrentView>,
    pub daily: Vec<DailyRow>,
    pub outfit_loading: bool,
    pub outfit: Option<String>,
}

impl DashboardView {
    /// Build the view from a controller state
    #[must_use]
    pub fn from_state(state: &ControllerState) -> Self {
        let snapshot = state.snapshot.as_ref();

        let current = snapshot.map(|s| {
            let current = s.current();
            let units = s.units();
            CurrentView {
                temperature: round(current.temperature),
                temperature_unit: units.temperature.clone(),
                description: current.classification().description,
                icon: current.icon(),
                humidity: current.humidity,
                wind_speed: format!("{}", current.wind_speed),
                wind_unit: units.wind_speed.clone(),
                precipitation_probability: current.precipitation_probability,
            }
        });

        let daily = snapshot
            .map(|s| {
                s.daily()
                    .iter()
                    .enumerate()
                    .map(|(i, day)| DailyRow {
                        label: if i == 0 {
                            "Today".to_string()
                        } else {
                            weekday_name(day.date.weekday()).to_string()
                        },
                        date: day.date,
                        icon: day.icon(),
                        description: day.classification().description,
                        high: round(day.temperature_max),
                        low: round(day.temperature_min),
                        precipitation_probability: day.precipitation_probability_max,
                    })
                    .collect()
            })
            .unwrap_or_default();

        let forecast_city = snapshot
            .and(state.snapshot_city)
            .filter(|c| *c != state.selected_city)
            .map(|c| c.name.to_string());

        Self {
            city: state.selected_city.name.to_string(),
            country: state.selected_city.country,
            forecast_city,
            unit: state.preferences.unit,
            theme: state.preferences.theme,
            rain_notification: state.preferences.rain_notification,
            loading: state.loading,
            stale: snapshot.is_some() && state.freshness.is_stale(),
            error: state.last_error.clone(),
            current,
            daily,
            outfit_loading: state.outfit.loading,
            outfit: state.outfit.suggestion.clone(),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round(value: f64) -> i64 {
    value.round() as i64
}

const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use domain::{
        AppPreferences, City, CurrentConditions, DailyForecast, SnapshotFreshness, UnitLabels,
        WeatherSnapshot,
    };

    use super::*;
    use crate::ports::MockWeatherPort;
    use crate::services::{OutfitService, WeatherController};

    fn base_state() -> ControllerState {
        WeatherController::new(
            Arc::new(MockWeatherPort::new()),
            OutfitService::unconfigured(),
            City::default_city(),
            AppPreferences::default(),
        )
        .state()
    }

    fn snapshot() -> WeatherSnapshot {
        let day = |d: u32, code: i32| DailyForecast {
            date: NaiveDate::from_ymd_opt(2026, 3, d).unwrap(),
            weather_code: code,
            temperature_min: 7.5,
            temperature_max: 14.49,
            precipitation_probability_max: Some(Percentage::clamped(30)),
        };
        WeatherSnapshot::new(
            CurrentConditions {
                temperature: 18.6,
                humidity: Percentage::clamped(72),
                wind_speed: 14.2,
                precipitation_probability: Percentage::clamped(30),
                weather_code: 0,
                is_day: false,
            },
            vec![day(2, 0), day(3, 61), day(4, 71)],
            UnitLabels {
                temperature: "°C".to_string(),
                wind_speed: "km/h".to_string(),
            },
        )
    }

    #[test]
    fn empty_state_has_no_conditions() {
        let view = DashboardView::from_state(&base_state());
        assert_eq!(view.city, "Taipei");
        assert!(view.current.is_none());
        assert!(view.daily.is_empty());
        assert!(!view.stale);
    }

    #[test]
    fn rounds_and_labels() {
        let mut state = base_state();
        state.snapshot = Some(snapshot());
        let view = DashboardView::from_state(&state);

        let current = view.current.unwrap();
        assert_eq!(current.temperature, 19);
        assert_eq!(current.temperature_unit, "°C");
        assert_eq!(current.icon, WeatherIcon::ClearNight);
        assert_eq!(current.description, "Clear sky");
        assert_eq!(current.wind_speed, "14.2");

        assert_eq!(view.daily.len(), 3);
        assert_eq!(view.daily[0].label, "Today");
        // 2026-03-03 is a Tuesday
        assert_eq!(view.daily[1].label, "Tuesday");
        assert_eq!(view.daily[1].icon, WeatherIcon::Rain);
        assert_eq!(view.daily[2].description, "Snow");
        assert_eq!(view.daily[0].high, 14);
        assert_eq!(view.daily[0].low, 8);
    }

    #[test]
    fn stale_marker_requires_snapshot() {
        let mut state = base_state();
        state.freshness = SnapshotFreshness::Stale;
        assert!(!DashboardView::from_state(&state).stale);

        state.snapshot = Some(snapshot());
        state.last_error = Some("HTTP 503".to_string());
        let view = DashboardView::from_state(&state);
        assert!(view.stale);
        assert_eq!(view.error.as_deref(), Some("HTTP 503"));
    }

    #[test]
    fn names_forecast_city_when_selection_moved_on() {
        let mut state = base_state();
        state.snapshot = Some(snapshot());
        state.snapshot_city = Some(state.selected_city);
        assert!(DashboardView::from_state(&state).forecast_city.is_none());

        state.selected_city = domain::find_city("Reykjavik").unwrap();
        state.freshness = SnapshotFreshness::Stale;
        let view = DashboardView::from_state(&state);
        assert_eq!(view.city, "Reykjavik");
        assert_eq!(view.forecast_city.as_deref(), Some("Taipei"));
        assert!(view.stale);
    }

    #[test]
    fn serializes_to_json() {
        let mut state = base_state();
        state.snapshot = Some(snapshot());
        let json = serde_json::to_value(DashboardView::from_state(&state)).unwrap();
        assert_eq!(json["city"], "Taipei");
        assert_eq!(json["current"]["icon"], "clear-night");
        assert_eq!(json["daily"][0]["label"], "Today");
    }
}
