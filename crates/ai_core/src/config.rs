//! Configuration for the inference engine

use serde::{Deserialize, Serialize};

/// Configuration for the inference engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the Gemini API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default model to use
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Temperature for sampling (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Top-p (nucleus) sampling
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// System prompt to use by default
    #[serde(default)]
    pub system_prompt: Option<String>,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

const fn default_max_tokens() -> u32 {
    256
}

const fn default_temperature() -> f32 {
    0.7
}

const fn default_top_p() -> f32 {
    0.95
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_model: default_model(),
            timeout_ms: default_timeout_ms(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            system_prompt: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = InferenceConfig::default();
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.default_model, "gemini-2.5-flash");
        assert_eq!(config.timeout_ms, 30000);
        assert_eq!(config.max_tokens, 256);
        assert!((config.temperature - 0.7).abs() < 0.01);
        assert!((config.top_p - 0.95).abs() < 0.01);
        assert!(config.system_prompt.is_none());
    }

    #[test]
    fn config_deserialization() {
        let json = r#"{"base_url":"http://custom:8080","default_model":"gemini-2.0-flash"}"#;
        let config: InferenceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_url, "http://custom:8080");
        assert_eq!(config.default_model, "gemini-2.0-flash");
        assert_eq!(config.max_tokens, 256);
    }

    #[test]
    fn config_deserialization_with_defaults() {
        let config: InferenceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.timeout_ms, 30000);
    }
}
