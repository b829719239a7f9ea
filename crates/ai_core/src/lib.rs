//! AI Core - Generative text inference
//!
//! Provides the inference abstraction used for outfit suggestions and a
//! client for the Gemini `generateContent` API.

pub mod config;
pub mod error;
pub mod gemini;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use gemini::GeminiInferenceEngine;
pub use ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage};
