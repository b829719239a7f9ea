//! Unit and theme preferences

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Measurement system requested from the forecast provider
///
/// Determines both the temperature and the wind-speed unit. The labels
/// actually displayed are always the ones echoed back by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitPreference {
    /// Celsius and km/h (provider defaults)
    #[default]
    Metric,
    /// Fahrenheit and mph
    Imperial,
}

impl UnitPreference {
    /// The other unit system
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }

    /// Expected temperature label, used before any data has arrived
    #[must_use]
    pub const fn temperature_hint(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }
}

impl fmt::Display for UnitPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "metric"),
            Self::Imperial => write!(f, "imperial"),
        }
    }
}

impl FromStr for UnitPreference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "celsius" | "c" => Ok(Self::Metric),
            "imperial" | "fahrenheit" | "f" => Ok(Self::Imperial),
            _ => Err(DomainError::invalid_value("unit", s)),
        }
    }
}

/// Display theme consumed by the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(DomainError::invalid_value("theme", s)),
        }
    }
}
