//! Weather service port
//!
//! Defines the interface for retrieving a normalized weather snapshot.

use async_trait::async_trait;
use domain::{GeoLocation, UnitPreference, WeatherSnapshot};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch current conditions and the daily outlook for a location
    ///
    /// The unit preference selects both the values and the unit labels
    /// carried by the snapshot.
    async fn fetch_weather(
        &self,
        location: &GeoLocation,
        unit: UnitPreference,
    ) -> Result<WeatherSnapshot, ApplicationError>;

    /// Check if the weather service is available
    async fn is_available(&self) -> bool;
}
