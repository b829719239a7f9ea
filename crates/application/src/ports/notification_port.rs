//! Notification port
//!
//! Outbound channel for rain alerts raised after a weather fetch.

use async_trait::async_trait;
use domain::Percentage;
#[cfg(test)]
use mockall::automock;
use serde::Serialize;

use crate::error::ApplicationError;

/// Alert raised when the selected city looks wet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RainAlert {
    /// Display name of the city
    pub city: String,
    /// Current precipitation probability
    pub precipitation_probability: Percentage,
    /// Condition description for the current weather code
    pub description: String,
}

impl std::fmt::Display for RainAlert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rain expected in {}: {} ({} chance of precipitation)",
            self.city, self.description, self.precipitation_probability
        )
    }
}

/// Port for delivering rain alerts
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationPort: Send + Sync {
    /// Deliver a rain alert
    async fn notify_rain(&self, alert: RainAlert) -> Result<(), ApplicationError>;
}
