//! Recommendation service
//!
//! Owns both engines and wraps their results in the response envelopes the
//! HTTP layer returns.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use crate::clothing::ClothingEngine;
use crate::config::KidsWeatherConfig;
use crate::error::KidsWeatherError;
use crate::models::{
    Coordinates, PlaygroundRequest, PlaygroundResponse, RecommendationResponse, ScoredPlayground,
    WeatherInput,
};
use crate::playground::{PlaygroundCatalog, PlaygroundEngine};

#[derive(Debug, Clone)]
pub struct RecommendationService {
    clothing: ClothingEngine,
    playgrounds: PlaygroundEngine,
}

impl RecommendationService {
    #[must_use]
    pub fn new(clothing: ClothingEngine, playgrounds: PlaygroundEngine) -> Self {
        Self {
            clothing,
            playgrounds,
        }
    }

    /// Build both engines from configuration and the built-in catalog
    pub fn from_config(config: &KidsWeatherConfig) -> crate::Result<Self> {
        let catalog = Arc::new(PlaygroundCatalog::builtin()?);
        Ok(Self::new(
            ClothingEngine::from_config(&config.clothing),
            PlaygroundEngine::new(catalog, &config.playgrounds),
        ))
    }

    #[instrument(skip(self), fields(temperature = input.temperature, condition = %input.condition))]
    pub fn get_clothing_recommendations(&self, input: WeatherInput) -> RecommendationResponse {
        let recommendations = self.clothing.recommend(&input);
        info!(items = recommendations.len(), "Generated clothing recommendations");
        RecommendationResponse {
            weather_input: input,
            recommendations,
            generated_at: Utc::now(),
        }
    }

    #[instrument(skip(self), fields(lat = request.location.lat, lng = request.location.lng))]
    pub fn get_playground_recommendations(&self, request: PlaygroundRequest) -> PlaygroundResponse {
        let playground_recommendations = self.playgrounds.recommend(
            &request.weather_input,
            &request.location,
            request.radius,
        );
        info!(
            venues = playground_recommendations.len(),
            "Generated playground recommendations"
        );
        PlaygroundResponse {
            playground_recommendations,
            location: request.location,
            weather_input: request.weather_input,
            generated_at: Utc::now(),
        }
    }

    #[instrument(skip(self))]
    pub fn get_playground_details(
        &self,
        id: &str,
        location: Coordinates,
    ) -> crate::Result<ScoredPlayground> {
        self.playgrounds
            .details(id, &location)
            .ok_or_else(|| KidsWeatherError::not_found("Playground not found"))
    }
}
