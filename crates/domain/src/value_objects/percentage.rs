//! Percentage value object
//!
//! A validated 0-100 value used for relative humidity and precipitation
//! probability.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Percentage;
//!
//! let p = Percentage::new(65).expect("valid percentage");
//! assert_eq!(p.value(), 65);
//! assert!(Percentage::new(101).is_err());
//! assert_eq!(Percentage::clamped(150).value(), 100);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a percentage is out of range
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid percentage: {0}% is out of range (must be 0-100)")]
pub struct InvalidPercentage(u8);

/// Percentage in the range 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Percentage(u8);

impl Percentage {
    /// Maximum valid percentage
    pub const MAX: u8 = 100;

    /// Zero percent
    pub const ZERO: Self = Self(0);

    /// Create a new validated percentage
    ///
    /// # Errors
    ///
    /// Returns `InvalidPercentage` if the value is greater than 100.
    pub const fn new(value: u8) -> Result<Self, InvalidPercentage> {
        if value > Self::MAX {
            Err(InvalidPercentage(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Create a percentage, clamping to the valid range
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Get the raw value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Percentage {
    type Error = InvalidPercentage;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

/// Custom deserialization that validates the range
impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
