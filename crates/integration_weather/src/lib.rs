//! Open-Meteo weather integration
//!
//! Client for the Open-Meteo Forecast API (<https://open-meteo.com>).
//! Fetches current conditions and a 7-day outlook and normalizes them into
//! a `domain::WeatherSnapshot`. No API key is required.

pub mod client;
mod models;

pub use client::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{ApiResponse, CurrentData, CurrentUnits, DailyData};
