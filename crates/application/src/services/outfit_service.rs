//! Outfit suggestion service
//!
//! Turns the current conditions of a snapshot into a prompt for the
//! generative model and reduces every outcome to a displayable string.

use std::sync::Arc;

use domain::{City, WeatherSnapshot};
use tracing::{debug, instrument, warn};

use crate::ports::InferencePort;

/// Returned when no inference backend is configured
pub const NOT_CONFIGURED_MESSAGE: &str = "API Key not configured. Unable to fetch AI suggestion.";

/// Returned when the inference backend fails
pub const UNAVAILABLE_MESSAGE: &str =
    "Could not connect to the fashion stylist AI right now. Please try again later.";

/// Returned when the model answers with empty text
pub const FALLBACK_SUGGESTION: &str = "Wear something comfortable!";

/// Service that asks the generative model for an outfit suggestion
#[derive(Clone)]
pub struct OutfitService {
    inference: Option<Arc<dyn InferencePort>>,
}

impl std::fmt::Debug for OutfitService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutfitService")
            .field("configured", &self.inference.is_some())
            .finish()
    }
}

impl OutfitService {
    /// Create a service without a backend
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self { inference: None }
    }

    /// Create from an optional backend
    #[must_use]
    pub fn from_option(inference: Option<Arc<dyn InferencePort>>) -> Self {
        Self { inference }
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.inference.is_some()
    }

    /// Build the stylist prompt for the current conditions
    #[must_use]
    pub fn build_prompt(city: &City, snapshot: &WeatherSnapshot) -> String {
        let current = snapshot.current();
        let units = snapshot.units();
        let condition = current.classification().description;

        format!(
            "I am in {city}.\n\
             The weather is currently {condition} with a temperature of {temp}{temp_unit}.\n\
             Humidity is {humidity} and wind speed is {wind}{wind_unit}.\n\
             Precipitation probability is {precipitation}.\n\n\
             Give me a short, stylish, and practical outfit suggestion (max 50 words).\n\
             Format the response as plain text.\n\
             Focus on the \"Vibe\" of the outfit.",
            city = city.name,
            temp = current.temperature,
            temp_unit = units.temperature,
            humidity = current.humidity,
            wind = current.wind_speed,
            wind_unit = units.wind_speed,
            precipitation = current.precipitation_probability,
        )
    }

    /// Ask for a suggestion; never fails
    #[instrument(skip(self, snapshot), fields(city = %city.name))]
    pub async fn suggest(&self, city: &City, snapshot: &WeatherSnapshot) -> String {
        let Some(inference) = &self.inference else {
            debug!("No inference backend configured");
            return NOT_CONFIGURED_MESSAGE.to_string();
        };

        let prompt = Self::build_prompt(city, snapshot);
        match inference.generate(&prompt).await {
            Ok(result) => {
                debug!(model = %result.model, latency_ms = result.latency_ms, "Outfit suggestion received");
                let text = result.content.trim();
                if text.is_empty() {
                    FALLBACK_SUGGESTION.to_string()
                } else {
                    text.to_string()
                }
            },
            Err(e) => {
                warn!(error = %e, "Outfit suggestion failed");
                UNAVAILABLE_MESSAGE.to_string()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::{CurrentConditions, Percentage, UnitLabels, find_city};

    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::{InferenceResult, MockInferencePort};

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot::new(
            CurrentConditions {
                temperature: 18.6,
                humidity: Percentage::clamped(72),
                wind_speed: 14.2,
                precipitation_probability: Percentage::clamped(40),
                weather_code: 61,
                is_day: true,
            },
            Vec::new(),
            UnitLabels {
                temperature: "°C".to_string(),
                wind_speed: "km/h".to_string(),
            },
        )
    }

    fn result(content: &str) -> InferenceResult {
        InferenceResult {
            content: content.to_string(),
            model: "test-model".to_string(),
            tokens_used: Some(20),
            latency_ms: 80,
        }
    }

    #[test]
    fn prompt_embeds_conditions() {
        let tokyo = find_city("Tokyo").unwrap();
        let prompt = OutfitService::build_prompt(&tokyo, &snapshot());

        assert!(prompt.contains("I am in Tokyo."));
        assert!(prompt.contains("currently Rain"));
        assert!(prompt.contains("18.6°C"));
        assert!(prompt.contains("Humidity is 72%"));
        assert!(prompt.contains("14.2km/h"));
        assert!(prompt.contains("Precipitation probability is 40%"));
        assert!(prompt.contains("max 50 words"));
        assert!(prompt.contains("\"Vibe\""));
    }

    #[tokio::test]
    async fn unconfigured_returns_fixed_message() {
        let service = OutfitService::unconfigured();
        let tokyo = find_city("Tokyo").unwrap();

        assert!(!service.is_configured());
        assert_eq!(service.suggest(&tokyo, &snapshot()).await, NOT_CONFIGURED_MESSAGE);
    }

    #[tokio::test]
    async fn returns_model_text_trimmed() {
        let mut mock = MockInferencePort::new();
        mock.expect_generate()
            .withf(|prompt| prompt.contains("Tokyo"))
            .times(1)
            .returning(|_| Ok(result("  Light layers and a compact umbrella.\n")));

        let service = OutfitService::from_option(Some(Arc::new(mock)));
        let tokyo = find_city("Tokyo").unwrap();

        assert_eq!(
            service.suggest(&tokyo, &snapshot()).await,
            "Light layers and a compact umbrella."
        );
    }

    #[tokio::test]
    async fn empty_response_falls_back() {
        let mut mock = MockInferencePort::new();
        mock.expect_generate().returning(|_| Ok(result("   ")));

        let service = OutfitService::from_option(Some(Arc::new(mock)));
        let paris = find_city("Paris").unwrap();

        assert_eq!(service.suggest(&paris, &snapshot()).await, FALLBACK_SUGGESTION);
    }

    #[tokio::test]
    async fn error_returns_unavailable_message() {
        let mut mock = MockInferencePort::new();
        mock.expect_generate()
            .returning(|_| Err(ApplicationError::Inference("connection refused".to_string())));

        let service = OutfitService::from_option(Some(Arc::new(mock)));
        let paris = find_city("Paris").unwrap();

        assert_eq!(service.suggest(&paris, &snapshot()).await, UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn debug_shows_configuration() {
        let debug = format!("{:?}", OutfitService::unconfigured());
        assert!(debug.contains("configured: false"));
    }
}
