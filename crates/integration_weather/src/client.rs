//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo Forecast API plus the normalization of
//! its response into a `WeatherSnapshot`.

use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{
    City, CurrentConditions, DailyForecast, GeoLocation, MAX_FORECAST_DAYS, Percentage,
    UnitLabels, UnitPreference, WeatherSnapshot,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiResponse, CurrentData, CurrentUnits, DailyData};

/// Fields requested for the current block
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,is_day,weather_code,wind_speed_10m";

/// Fields requested for the daily block
const DAILY_FIELDS: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,precipitation_probability_max";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching normalized weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch current conditions and the daily outlook for a location
    async fn fetch_weather(
        &self,
        latitude: f64,
        longitude: f64,
        unit: UnitPreference,
    ) -> Result<WeatherSnapshot, WeatherError>;

    /// Check if the weather service is reachable
    async fn is_healthy(&self) -> bool;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }

    /// Query parameters for a forecast request
    ///
    /// Imperial asks for Fahrenheit and mph. Metric sends no unit
    /// parameters and relies on the provider defaults (°C, km/h).
    pub(crate) fn forecast_query(
        latitude: f64,
        longitude: f64,
        unit: UnitPreference,
    ) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
        ];

        if unit == UnitPreference::Imperial {
            query.push(("temperature_unit", "fahrenheit".to_string()));
            query.push(("wind_speed_unit", "mph".to_string()));
        }

        query
    }

    /// Normalize a raw response into a snapshot
    pub(crate) fn normalize(response: ApiResponse) -> Result<WeatherSnapshot, WeatherError> {
        let current = response.current.ok_or_else(|| {
            WeatherError::ParseError("No current weather data in response".to_string())
        })?;
        let units = response.current_units.ok_or_else(|| {
            WeatherError::ParseError("No current unit metadata in response".to_string())
        })?;
        let daily = response.daily.ok_or_else(|| {
            WeatherError::ParseError("No daily forecast data in response".to_string())
        })?;

        let forecasts = Self::parse_daily_forecasts(&daily)?;
        let current = Self::parse_current(&current, &daily);

        Ok(WeatherSnapshot::new(
            current,
            forecasts,
            Self::parse_units(units),
        ))
    }

    /// Build current conditions
    ///
    /// The current block carries no precipitation probability, so today's
    /// daily maximum stands in for it.
    fn parse_current(data: &CurrentData, daily: &DailyData) -> CurrentConditions {
        let precipitation_probability = daily
            .precipitation_probability_at(0)
            .map_or(Percentage::ZERO, to_percentage);

        CurrentConditions {
            temperature: data.temperature_2m,
            humidity: to_percentage(data.relative_humidity_2m),
            wind_speed: data.wind_speed_10m,
            precipitation_probability,
            weather_code: data.weather_code,
            is_day: data.is_day != 0,
        }
    }

    /// Build the daily series
    ///
    /// Stops at the first index without a date, or without a code or
    /// temperature, even if later indices carry data.
    fn parse_daily_forecasts(daily: &DailyData) -> Result<Vec<DailyForecast>, WeatherError> {
        let mut forecasts = Vec::with_capacity(MAX_FORECAST_DAYS);

        for i in 0..MAX_FORECAST_DAYS {
            let Some(date) = daily.date_at(i) else {
                break;
            };
            let (Some(weather_code), Some(temperature_max), Some(temperature_min)) = (
                value_at(&daily.weather_code, i),
                value_at(&daily.temperature_2m_max, i),
                value_at(&daily.temperature_2m_min, i),
            ) else {
                debug!(index = i, "Daily series truncated at incomplete entry");
                break;
            };

            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|e| WeatherError::ParseError(format!("Invalid date '{date}': {e}")))?;

            forecasts.push(DailyForecast {
                date,
                weather_code,
                temperature_min,
                temperature_max,
                precipitation_probability_max: daily
                    .precipitation_probability_at(i)
                    .map(to_percentage),
            });
        }

        Ok(forecasts)
    }

    fn parse_units(units: CurrentUnits) -> UnitLabels {
        UnitLabels {
            temperature: units.temperature_2m,
            wind_speed: units.wind_speed_10m,
        }
    }

    async fn get_json(&self, query: &[(&'static str, String)]) -> Result<ApiResponse, WeatherError> {
        let url = self.forecast_url();
        debug!(url = %url, ?query, "Fetching weather forecast");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

fn value_at<T: Copy>(values: &[Option<T>], index: usize) -> Option<T> {
    values.get(index).copied().flatten()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_percentage(value: f64) -> Percentage {
    if value.is_nan() {
        return Percentage::ZERO;
    }
    Percentage::clamped(value.round().clamp(0.0, 100.0) as u8)
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude, unit = %unit))]
    async fn fetch_weather(
        &self,
        latitude: f64,
        longitude: f64,
        unit: UnitPreference,
    ) -> Result<WeatherSnapshot, WeatherError> {
        if !GeoLocation::is_valid(latitude, longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }

        let query = Self::forecast_query(latitude, longitude, unit);
        let response = self.get_json(&query).await?;
        let snapshot = Self::normalize(response)?;

        debug!(
            days = snapshot.daily().len(),
            code = snapshot.current().weather_code,
            "Normalized weather snapshot"
        );
        Ok(snapshot)
    }

    async fn is_healthy(&self) -> bool {
        let location = City::default_city().location;
        let query = [
            ("latitude", location.latitude().to_string()),
            ("longitude", location.longitude().to_string()),
            ("current", "temperature_2m".to_string()),
        ];
        self.get_json(&query).await.is_ok()
    }
}
