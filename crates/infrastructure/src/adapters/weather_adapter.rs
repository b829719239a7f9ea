//! Weather adapter - Implements WeatherPort using integration_weather

use application::{ApplicationError, WeatherPort};
use async_trait::async_trait;
use domain::{GeoLocation, UnitPreference, WeatherSnapshot};
use integration_weather::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for weather services using the Open-Meteo API
pub struct WeatherAdapter {
    client: OpenMeteoClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenMeteoClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenMeteoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
            WeatherError::InvalidCoordinates => {
                ApplicationError::InvalidInput("Invalid coordinates".into())
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude(), unit = %unit))]
    async fn fetch_weather(
        &self,
        location: &GeoLocation,
        unit: UnitPreference,
    ) -> Result<WeatherSnapshot, ApplicationError> {
        let result = self
            .client
            .fetch_weather(location.latitude(), location.longitude(), unit)
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(snapshot) => {
                debug!(
                    temperature = snapshot.current().temperature,
                    days = snapshot.daily().len(),
                    "Retrieved weather snapshot"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather snapshot");
            },
        }

        result
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
