//! Data models for the `KidsWeather` service
//!
//! This module contains the core domain models organized by concern:
//! - Weather: the validated weather input and its closed enums
//! - Location: geographic coordinates
//! - Clothing: recommended clothing items
//! - Playground: venue reference data and scored results
//! - Response: the envelopes returned to callers

pub mod clothing;
pub mod location;
pub mod playground;
pub mod response;
pub mod weather;

pub use clothing::{ClothingCategory, ClothingItem};
pub use location::Coordinates;
pub use playground::{Cost, PlaygroundVenue, ScoredPlayground, VenueCategory, WeatherSuitability};
pub use response::{
    CurrentWeather, HealthStatus, PlaygroundRequest, PlaygroundResponse, RecommendationResponse,
};
pub use weather::{AgeGroup, Condition, WeatherInput};
