//! Value Objects - Immutable, identity-less domain primitives

mod city;
mod geo_location;
mod percentage;
mod preferences;

pub use city::{CITIES, City, find_city};
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use percentage::{InvalidPercentage, Percentage};
pub use preferences::{Theme, UnitPreference};
