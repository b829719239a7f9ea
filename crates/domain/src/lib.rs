//! Domain layer for Nimbus
//!
//! Contains the city catalog, display preferences, the weather snapshot
//! entity and the WMO weather code classifier. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;
pub mod weather_code;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
pub use weather_code::{Classification, WeatherCategory, WeatherIcon, classify};
