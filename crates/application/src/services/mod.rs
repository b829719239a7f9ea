//! Application services - Use case implementations

mod dashboard;
mod outfit_service;
mod weather_controller;

pub use dashboard::{CurrentView, DailyRow, DashboardView};
pub use outfit_service::{
    FALLBACK_SUGGESTION, NOT_CONFIGURED_MESSAGE, OutfitService, UNAVAILABLE_MESSAGE,
};
pub use weather_controller::{
    ControllerState, DEFAULT_RAIN_ALERT_THRESHOLD, FetchOutcome, FetchTicket, OutfitState,
    WeatherController,
};
