//! Gemini inference adapter - Implements InferencePort using ai_core

use std::sync::Arc;
use std::time::Instant;

use ai_core::{
    GeminiInferenceEngine, InferenceConfig, InferenceEngine, InferenceError, InferenceRequest,
};
use application::{ApplicationError, InferencePort, InferenceResult};
use async_trait::async_trait;
use secrecy::SecretString;
use tracing::{debug, info, instrument};

use crate::config::AppConfig;

/// Adapter for the Gemini generative language API
#[derive(Debug)]
pub struct GeminiInferenceAdapter {
    engine: GeminiInferenceEngine,
    system_prompt: Option<String>,
}

impl GeminiInferenceAdapter {
    /// Create a new adapter with the given configuration and API key
    ///
    /// A configured `system_prompt` is sent as the system instruction of
    /// every request.
    pub fn new(config: InferenceConfig, api_key: SecretString) -> Result<Self, ApplicationError> {
        let system_prompt = config
            .system_prompt
            .clone()
            .filter(|prompt| !prompt.trim().is_empty());
        let engine = GeminiInferenceEngine::new(config, api_key)
            .map_err(|e| ApplicationError::Inference(e.to_string()))?;

        Ok(Self {
            engine,
            system_prompt,
        })
    }

    /// Build the outfit inference backend from application configuration
    ///
    /// Returns `None` when no API key is configured, which leaves outfit
    /// suggestions disabled rather than failing startup.
    pub fn from_config(
        config: &AppConfig,
    ) -> Result<Option<Arc<dyn InferencePort>>, ApplicationError> {
        let Some(api_key) = config.outfit.api_key.clone() else {
            info!("No Gemini API key configured, outfit suggestions disabled");
            return Ok(None);
        };

        let adapter = Self::new(config.inference.clone(), api_key)?;
        Ok(Some(Arc::new(adapter)))
    }

    /// Convert ai_core error to application error
    fn map_error(e: InferenceError) -> ApplicationError {
        match e {
            InferenceError::RateLimited => ApplicationError::RateLimited,
            InferenceError::ConnectionFailed(msg) => {
                ApplicationError::ExternalService(format!("Gemini connection failed: {msg}"))
            },
            InferenceError::Timeout => {
                ApplicationError::ExternalService("Gemini request timed out".to_string())
            },
            InferenceError::Unauthorized(msg) => {
                ApplicationError::Configuration(format!("Gemini API key rejected: {msg}"))
            },
            other => ApplicationError::Inference(other.to_string()),
        }
    }

    async fn run(&self, request: InferenceRequest) -> Result<InferenceResult, ApplicationError> {
        let start = Instant::now();

        let response = self
            .engine
            .generate(request)
            .await
            .map_err(Self::map_error)?;

        #[allow(clippy::cast_possible_truncation)]
        let latency_ms = start.elapsed().as_millis() as u64;

        debug!(
            model = %response.model,
            tokens = ?response.usage.as_ref().map(|u| u.total_tokens),
            latency_ms = latency_ms,
            "Inference completed"
        );

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            tokens_used: response.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }
}

#[async_trait]
impl InferencePort for GeminiInferenceAdapter {
    #[instrument(skip(self, message), fields(message_len = message.len()))]
    async fn generate(&self, message: &str) -> Result<InferenceResult, ApplicationError> {
        #[allow(clippy::option_if_let_else)]
        let request = match &self.system_prompt {
            Some(system) => InferenceRequest::with_system(system, message),
            None => InferenceRequest::simple(message),
        };
        self.run(request).await
    }

    async fn is_healthy(&self) -> bool {
        self.engine.health_check().await.unwrap_or(false)
    }

    fn current_model(&self) -> String {
        self.engine.default_model().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SecretString {
        SecretString::from("test-key".to_string())
    }

    #[test]
    fn new_creates_adapter() {
        let adapter = GeminiInferenceAdapter::new(InferenceConfig::default(), key()).unwrap();
        assert_eq!(adapter.current_model(), "gemini-2.5-flash");
        assert!(adapter.system_prompt.is_none());
    }

    #[test]
    fn system_prompt_comes_from_config() {
        let config = InferenceConfig {
            system_prompt: Some("Be brief".to_string()),
            ..InferenceConfig::default()
        };
        let adapter = GeminiInferenceAdapter::new(config, key()).unwrap();
        assert_eq!(adapter.system_prompt.as_deref(), Some("Be brief"));
    }

    #[test]
    fn blank_system_prompt_is_ignored() {
        let config = InferenceConfig {
            system_prompt: Some("   ".to_string()),
            ..InferenceConfig::default()
        };
        let adapter = GeminiInferenceAdapter::new(config, key()).unwrap();
        assert!(adapter.system_prompt.is_none());
    }

    #[test]
    fn debug_does_not_leak_key() {
        let adapter = GeminiInferenceAdapter::new(InferenceConfig::default(), key()).unwrap();
        let debug = format!("{adapter:?}");
        assert!(debug.contains("GeminiInferenceAdapter"));
        assert!(!debug.contains("test-key"));
    }

    #[test]
    fn from_config_without_key_is_none() {
        let config = AppConfig::default();
        assert!(GeminiInferenceAdapter::from_config(&config).unwrap().is_none());
    }

    #[test]
    fn from_config_with_key_builds_port() {
        let mut config = AppConfig::default();
        config.outfit.api_key = Some(key());
        config.inference.default_model = "gemini-2.0-flash".to_string();

        let port = GeminiInferenceAdapter::from_config(&config).unwrap().unwrap();
        assert_eq!(port.current_model(), "gemini-2.0-flash");
    }

    #[test]
    fn map_error_rate_limited() {
        assert!(matches!(
            GeminiInferenceAdapter::map_error(InferenceError::RateLimited),
            ApplicationError::RateLimited
        ));
    }

    #[test]
    fn map_error_timeout_is_external() {
        assert!(matches!(
            GeminiInferenceAdapter::map_error(InferenceError::Timeout),
            ApplicationError::ExternalService(_)
        ));
    }

    #[test]
    fn map_error_unauthorized_is_configuration() {
        let err = GeminiInferenceAdapter::map_error(InferenceError::Unauthorized("HTTP 403".into()));
        assert!(matches!(err, ApplicationError::Configuration(_)));
        assert!(err.to_string().contains("HTTP 403"));
    }

    #[test]
    fn map_error_other_is_inference() {
        assert!(matches!(
            GeminiInferenceAdapter::map_error(InferenceError::InvalidResponse("empty".into())),
            ApplicationError::Inference(_)
        ));
    }
}
