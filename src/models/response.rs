//! Request and response envelopes exchanged with callers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::clothing::ClothingItem;
use super::location::Coordinates;
use super::playground::ScoredPlayground;
use super::weather::{Condition, WeatherInput};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub weather_input: WeatherInput,
    pub recommendations: Vec<ClothingItem>,
    pub generated_at: DateTime<Utc>,
}

/// Validated playground search request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundRequest {
    pub weather_input: WeatherInput,
    pub location: Coordinates,
    /// Search radius in km, the configured default applies when absent
    pub radius: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundResponse {
    pub playground_recommendations: Vec<ScoredPlayground>,
    pub location: Coordinates,
    pub weather_input: WeatherInput,
    pub generated_at: DateTime<Utc>,
}

/// Current conditions at a coordinate, reduced to the recommendation inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Rounded to whole degrees Celsius
    pub temperature: i32,
    pub humidity: u8,
    pub condition: Condition,
    /// "lat, lng" rounded to two decimals
    pub location: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}
