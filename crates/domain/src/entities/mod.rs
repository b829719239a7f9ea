//! Domain entities

mod preferences;
mod weather_snapshot;

pub use preferences::AppPreferences;
pub use weather_snapshot::{
    CurrentConditions, DailyForecast, MAX_FORECAST_DAYS, SnapshotFreshness, UnitLabels,
    WeatherSnapshot,
};
