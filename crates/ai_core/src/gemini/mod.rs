//! Gemini generative language API integration

mod client;
mod models;

pub use client::GeminiInferenceEngine;
