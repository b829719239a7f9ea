//! Gemini client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument, warn};

use super::models::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ModelsResponse,
    Part,
};
use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{InferenceEngine, InferenceRequest, InferenceResponse, TokenUsage};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Inference engine backed by the Gemini generative language API
pub struct GeminiInferenceEngine {
    client: Client,
    config: InferenceConfig,
    api_key: SecretString,
}

impl std::fmt::Debug for GeminiInferenceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiInferenceEngine")
            .field("config", &self.config)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl GeminiInferenceEngine {
    /// Create a new Gemini inference engine
    pub fn new(config: InferenceConfig, api_key: SecretString) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.default_model,
            "Initialized Gemini inference engine"
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Build the API URL for a given path under `v1beta`
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/v1beta/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn build_request(&self, request: &InferenceRequest) -> GenerateContentRequest {
        let system = request.system_text();

        let contents = request
            .messages
            .iter()
            .filter(|m| !m.is_system())
            .map(|m| Content {
                role: Some(if m.role == "assistant" { "model" } else { "user" }.to_string()),
                parts: vec![Part {
                    text: Some(m.content.clone()),
                }],
            })
            .collect();

        GenerateContentRequest {
            contents,
            system_instruction: system.map(|text| Content {
                role: None,
                parts: vec![Part { text: Some(text) }],
            }),
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                top_p: self.config.top_p,
                max_output_tokens: self.config.max_tokens,
            },
        }
    }

    async fn check_status(response: Response) -> Result<Response, InferenceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, body = %body, "Gemini request failed");

        Err(match status {
            StatusCode::TOO_MANY_REQUESTS => InferenceError::RateLimited,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                InferenceError::Unauthorized(format!("HTTP {status}"))
            },
            _ => InferenceError::ServerError(format!("Status {status}: {body}")),
        })
    }
}

#[async_trait]
impl InferenceEngine for GeminiInferenceEngine {
    #[instrument(skip(self, request), fields(model = %self.config.default_model))]
    async fn generate(&self, request: InferenceRequest) -> Result<InferenceResponse, InferenceError> {
        let model = self.config.default_model.clone();
        let body = self.build_request(&request);

        debug!("Sending generateContent request");

        let response = self
            .client
            .post(self.api_url(&format!("models/{model}:generateContent")))
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let candidate = parsed
            .candidates
            .first()
            .ok_or_else(|| InferenceError::InvalidResponse("no candidates".to_string()))?;

        let usage = parsed.usage_metadata.map(|u| TokenUsage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        debug!(tokens = ?usage, "Inference completed");

        Ok(InferenceResponse {
            content: candidate.text(),
            model: parsed.model_version.unwrap_or(model),
            usage,
            finish_reason: candidate.finish_reason.clone(),
        })
    }

    async fn health_check(&self) -> Result<bool, InferenceError> {
        match self.list_models().await {
            Ok(_) => Ok(true),
            Err(InferenceError::ConnectionFailed(_) | InferenceError::Timeout) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn list_models(&self) -> Result<Vec<String>, InferenceError> {
        let response = self
            .client
            .get(self.api_url("models"))
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let models: ModelsResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        Ok(models
            .models
            .into_iter()
            .map(|m| {
                m.name
                    .strip_prefix("models/")
                    .map_or_else(|| m.name.clone(), str::to_string)
            })
            .collect())
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }
}
