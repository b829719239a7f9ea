//! Raw Open-Meteo response shapes
//!
//! Daily arrays hold `Option`s because the provider emits `null` for days
//! it has no data for.

use serde::Deserialize;

/// Raw API response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub current: Option<CurrentData>,
    #[serde(default)]
    pub current_units: Option<CurrentUnits>,
    #[serde(default)]
    pub daily: Option<DailyData>,
}

/// Raw current conditions block
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentData {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub is_day: u8,
    pub weather_code: i32,
    pub wind_speed_10m: f64,
}

/// Unit metadata for the current block
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentUnits {
    pub temperature_2m: String,
    pub wind_speed_10m: String,
}

/// Raw daily arrays, indexed by day
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyData {
    #[serde(default)]
    pub time: Vec<Option<String>>,
    #[serde(default)]
    pub weather_code: Vec<Option<i32>>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability_max: Option<Vec<Option<f64>>>,
}

impl DailyData {
    /// Date string at `index`, treating null and empty strings as missing
    #[must_use]
    pub fn date_at(&self, index: usize) -> Option<&str> {
        self.time
            .get(index)
            .and_then(Option::as_deref)
            .filter(|s| !s.is_empty())
    }

    /// Precipitation probability at `index`, if reported
    #[must_use]
    pub fn precipitation_probability_at(&self, index: usize) -> Option<f64> {
        self.precipitation_probability_max
            .as_ref()
            .and_then(|p| p.get(index).copied().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_accepts_nulls() {
        let daily: DailyData = serde_json::from_value(serde_json::json!({
            "time": ["2026-03-01", null, ""],
            "weather_code": [3, null, 1],
            "temperature_2m_max": [8.0, null, 9.0],
            "temperature_2m_min": [2.0, null, 1.0],
            "precipitation_probability_max": [null, 40, 10]
        }))
        .unwrap();

        assert_eq!(daily.date_at(0), Some("2026-03-01"));
        assert_eq!(daily.date_at(1), None);
        assert_eq!(daily.date_at(2), None);
        assert_eq!(daily.date_at(9), None);
        assert_eq!(daily.precipitation_probability_at(0), None);
        assert_eq!(daily.precipitation_probability_at(1), Some(40.0));
    }

    #[test]
    fn missing_probability_array_is_none() {
        let daily: DailyData =
            serde_json::from_value(serde_json::json!({ "time": ["2026-03-01"] })).unwrap();
        assert!(daily.precipitation_probability_max.is_none());
        assert_eq!(daily.precipitation_probability_at(0), None);
    }

    #[test]
    fn response_blocks_are_optional() {
        let response: ApiResponse = serde_json::from_str("{}").unwrap();
        assert!(response.current.is_none());
        assert!(response.current_units.is_none());
        assert!(response.daily.is_none());
    }
}
