//! Weather snapshot entity
//!
//! The normalized result of one successful forecast fetch. A snapshot is
//! replaced wholesale on every applied fetch and never mutated in place.

use chrono::NaiveDate;
use serde::Serialize;

use crate::value_objects::Percentage;
use crate::weather_code::{Classification, WeatherIcon, classify};

/// Maximum number of daily entries kept in a snapshot
pub const MAX_FORECAST_DAYS: usize = 7;

/// Instantaneous conditions at the selected city
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrentConditions {
    /// Temperature in the unit given by `UnitLabels::temperature`
    pub temperature: f64,
    /// Relative humidity
    pub humidity: Percentage,
    /// Wind speed in the unit given by `UnitLabels::wind_speed`
    pub wind_speed: f64,
    /// Precipitation probability
    ///
    /// The provider reports no instantaneous probability, so this is
    /// today's daily maximum (0 when unavailable). It overstates the chance
    /// of rain "right now" on days with a short wet spell.
    pub precipitation_probability: Percentage,
    /// WMO weather code
    pub weather_code: i32,
    /// Whether the sun is up at the location
    pub is_day: bool,
}

impl CurrentConditions {
    /// Category and description for the current weather code
    #[must_use]
    pub const fn classification(&self) -> Classification {
        classify(self.weather_code)
    }

    /// Icon for the current conditions, honouring day/night
    #[must_use]
    pub const fn icon(&self) -> WeatherIcon {
        WeatherIcon::for_code(self.weather_code, self.is_day)
    }
}

/// Aggregates for a single forecast day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weather_code: i32,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub precipitation_probability_max: Option<Percentage>,
}

impl DailyForecast {
    /// Category and description for the day's weather code
    #[must_use]
    pub const fn classification(&self) -> Classification {
        classify(self.weather_code)
    }

    /// Daily icons always use the day variant
    #[must_use]
    pub const fn icon(&self) -> WeatherIcon {
        WeatherIcon::for_code(self.weather_code, true)
    }
}

/// Unit labels as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitLabels {
    pub temperature: String,
    pub wind_speed: String,
}

/// Current conditions plus up to seven days of forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    current: CurrentConditions,
    daily: Vec<DailyForecast>,
    units: UnitLabels,
}

impl WeatherSnapshot {
    /// Build a snapshot, keeping at most `MAX_FORECAST_DAYS` daily entries
    ///
    /// Entries are expected in chronological order starting today; extra
    /// entries are dropped, missing ones are never padded.
    #[must_use]
    pub fn new(current: CurrentConditions, mut daily: Vec<DailyForecast>, units: UnitLabels) -> Self {
        daily.truncate(MAX_FORECAST_DAYS);
        Self {
            current,
            daily,
            units,
        }
    }

    #[must_use]
    pub const fn current(&self) -> &CurrentConditions {
        &self.current
    }

    #[must_use]
    pub fn daily(&self) -> &[DailyForecast] {
        &self.daily
    }

    #[must_use]
    pub const fn units(&self) -> &UnitLabels {
        &self.units
    }

    /// Today's forecast, if the provider returned one
    #[must_use]
    pub fn today(&self) -> Option<&DailyForecast> {
        self.daily.first()
    }
}

/// Whether the held snapshot reflects the latest fetch for the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotFreshness {
    #[default]
    Fresh,
    /// A later fetch failed; the snapshot is from an earlier success
    Stale,
}

impl SnapshotFreshness {
    #[must_use]
    pub const fn is_stale(self) -> bool {
        matches!(self, Self::Stale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather_code::WeatherCategory;

    fn current(code: i32, is_day: bool) -> CurrentConditions {
        CurrentConditions {
            temperature: 21.4,
            humidity: Percentage::clamped(60),
            wind_speed: 12.0,
            precipitation_probability: Percentage::clamped(10),
            weather_code: code,
            is_day,
        }
    }

    fn day(offset: u32) -> DailyForecast {
        DailyForecast {
            date: NaiveDate::from_ymd_opt(2026, 3, 1 + offset).unwrap(),
            weather_code: 3,
            temperature_min: 10.0,
            temperature_max: 18.0,
            precipitation_probability_max: None,
        }
    }

    fn units() -> UnitLabels {
        UnitLabels {
            temperature: "°C".to_string(),
            wind_speed: "km/h".to_string(),
        }
    }

    #[test]
    fn truncates_to_seven_days() {
        let daily = (0..10).map(day).collect();
        let snapshot = WeatherSnapshot::new(current(0, true), daily, units());
        assert_eq!(snapshot.daily().len(), MAX_FORECAST_DAYS);
        assert_eq!(snapshot.daily()[6].date, day(6).date);
    }

    #[test]
    fn short_series_is_not_padded() {
        let snapshot = WeatherSnapshot::new(current(0, true), vec![day(0), day(1)], units());
        assert_eq!(snapshot.daily().len(), 2);
        assert_eq!(snapshot.today().map(|d| d.date), Some(day(0).date));
    }

    #[test]
    fn empty_series_has_no_today() {
        let snapshot = WeatherSnapshot::new(current(0, true), Vec::new(), units());
        assert!(snapshot.today().is_none());
    }

    #[test]
    fn current_icon_uses_day_flag() {
        assert_eq!(current(0, false).icon(), WeatherIcon::ClearNight);
        assert_eq!(current(61, false).icon(), WeatherIcon::Rain);
        assert_eq!(current(61, true).classification().category, WeatherCategory::Rain);
    }

    #[test]
    fn serializes_for_json_output() {
        let snapshot = WeatherSnapshot::new(current(2, true), vec![day(0)], units());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["current"]["weather_code"], 2);
        assert_eq!(json["daily"][0]["date"], "2026-03-01");
        assert_eq!(json["units"]["wind_speed"], "km/h");
    }

    #[test]
    fn freshness_defaults_to_fresh() {
        assert_eq!(SnapshotFreshness::default(), SnapshotFreshness::Fresh);
        assert!(SnapshotFreshness::Stale.is_stale());
        assert!(!SnapshotFreshness::Fresh.is_stale());
    }
}
