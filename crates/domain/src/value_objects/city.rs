//! Static city catalog

use serde::Serialize;
use std::fmt;

use super::GeoLocation;
use crate::errors::DomainError;

/// A named location the user can pick from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    /// Display name, unique within the catalog
    pub name: &'static str,
    /// Coordinates sent to the forecast provider
    pub location: GeoLocation,
    /// ISO-like country code shown next to the name
    pub country: &'static str,
}

impl City {
    const fn new(name: &'static str, latitude: f64, longitude: f64, country: &'static str) -> Self {
        Self {
            name,
            location: GeoLocation::new_unchecked(latitude, longitude),
            country,
        }
    }

    /// The city selected on startup
    #[must_use]
    pub const fn default_city() -> Self {
        CITIES[0]
    }
}

impl Default for City {
    fn default() -> Self {
        Self::default_city()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.country)
    }
}

/// All selectable cities, in display order
pub static CITIES: [City; 8] = [
    City::new("Taipei", 25.0330, 121.5654, "TW"),
    City::new("Tokyo", 35.6762, 139.6503, "JP"),
    City::new("New York", 40.7128, -74.0060, "US"),
    City::new("London", 51.5074, -0.1278, "UK"),
    City::new("Paris", 48.8566, 2.3522, "FR"),
    City::new("Sydney", -33.8688, 151.2093, "AU"),
    City::new("Reykjavik", 64.1466, -21.9426, "IS"),
    City::new("Singapore", 1.3521, 103.8198, "SG"),
];

/// Look up a catalog city by name, ignoring case and surrounding whitespace
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no city has that name.
pub fn find_city(name: &str) -> Result<City, DomainError> {
    let wanted = name.trim();
    CITIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(wanted))
        .copied()
        .ok_or_else(|| DomainError::not_found("City", wanted))
}
