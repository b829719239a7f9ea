//! WMO weather code classification
//!
//! Buckets the WMO weather interpretation codes reported by the forecast
//! provider into the categories the dashboard can display.
//!
//! See: <https://open-meteo.com/en/docs> for the WMO code reference

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display category derived from a WMO weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCategory {
    /// WMO 0
    Clear,
    /// WMO 1-3
    PartlyCloudy,
    /// WMO 45-48
    Fog,
    /// WMO 51-55
    Drizzle,
    /// WMO 61-65
    Rain,
    /// WMO 71-77
    Snow,
    /// WMO 80-82
    RainShowers,
    /// WMO 95-99
    Thunderstorm,
    /// Any other code
    Unknown,
}

impl WeatherCategory {
    /// Classify a WMO weather code. Ranges are inclusive.
    #[must_use]
    pub const fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=3 => Self::PartlyCloudy,
            45..=48 => Self::Fog,
            51..=55 => Self::Drizzle,
            61..=65 => Self::Rain,
            71..=77 => Self::Snow,
            80..=82 => Self::RainShowers,
            95..=99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    /// Human-readable description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear sky",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::RainShowers => "Rain showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether this category means liquid precipitation is falling
    #[must_use]
    pub const fn is_wet(&self) -> bool {
        matches!(
            self,
            Self::Drizzle | Self::Rain | Self::RainShowers | Self::Thunderstorm
        )
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Result of classifying a weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: WeatherCategory,
    pub description: &'static str,
}

/// Classify a WMO weather code into a category and description
#[must_use]
pub const fn classify(code: i32) -> Classification {
    let category = WeatherCategory::from_wmo_code(code);
    Classification {
        category,
        description: category.description(),
    }
}

/// Icon shown for a weather category
///
/// Only `Clear` distinguishes day and night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherIcon {
    ClearDay,
    ClearNight,
    PartlyCloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    RainShowers,
    Thunderstorm,
    Unknown,
}

impl WeatherIcon {
    /// Pick the icon for a category and day/night flag
    #[must_use]
    pub const fn select(category: WeatherCategory, is_day: bool) -> Self {
        match category {
            WeatherCategory::Clear if is_day => Self::ClearDay,
            WeatherCategory::Clear => Self::ClearNight,
            WeatherCategory::PartlyCloudy => Self::PartlyCloudy,
            WeatherCategory::Fog => Self::Fog,
            WeatherCategory::Drizzle => Self::Drizzle,
            WeatherCategory::Rain => Self::Rain,
            WeatherCategory::Snow => Self::Snow,
            WeatherCategory::RainShowers => Self::RainShowers,
            WeatherCategory::Thunderstorm => Self::Thunderstorm,
            WeatherCategory::Unknown => Self::Unknown,
        }
    }

    /// Pick the icon straight from a WMO code
    #[must_use]
    pub const fn for_code(code: i32, is_day: bool) -> Self {
        Self::select(WeatherCategory::from_wmo_code(code), is_day)
    }

    /// Stable icon name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ClearDay => "clear-day",
            Self::ClearNight => "clear-night",
            Self::PartlyCloudy => "partly-cloudy",
            Self::Fog => "fog",
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::RainShowers => "rain-showers",
            Self::Thunderstorm => "thunderstorm",
            Self::Unknown => "unknown",
        }
    }

    /// Emoji glyph for terminal rendering
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::ClearDay => "☀️",
            Self::ClearNight => "🌙",
            Self::PartlyCloudy => "⛅",
            Self::Fog => "🌫️",
            Self::Drizzle => "🌦️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::RainShowers => "🌦️",
            Self::Thunderstorm => "⛈️",
            Self::Unknown => "❓",
        }
    }
}

impl fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
