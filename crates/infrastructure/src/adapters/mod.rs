//! Adapters implementing application ports

mod channel_notification_adapter;
mod gemini_inference_adapter;
mod weather_adapter;

pub use channel_notification_adapter::ChannelNotificationAdapter;
pub use gemini_inference_adapter::GeminiInferenceAdapter;
pub use weather_adapter::WeatherAdapter;
