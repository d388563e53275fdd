//! `KidsWeather` - weather-based outfit and playground suggestions for children
//!
//! This library turns a weather reading and a child's age group into an
//! ordered clothing list, and ranks nearby venues suited to the same weather.

pub mod api;
pub mod clothing;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod playground;
pub mod service;
pub mod validation;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use clothing::ClothingEngine;
pub use config::KidsWeatherConfig;
pub use error::{FieldError, KidsWeatherError};
pub use models::{
    AgeGroup, ClothingItem, Condition, Coordinates, ScoredPlayground, WeatherInput,
};
pub use playground::{PlaygroundCatalog, PlaygroundEngine};
pub use service::RecommendationService;
pub use weather::{OpenMeteoProvider, WeatherProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, KidsWeatherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
