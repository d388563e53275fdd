//! HTTP handlers mounted under `/api`

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::Json,
    routing::{get, post},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{FieldError, KidsWeatherError};
use crate::models::{
    CurrentWeather, HealthStatus, PlaygroundResponse, RecommendationResponse, ScoredPlayground,
};
use crate::service::RecommendationService;
use crate::validation;
use crate::weather::WeatherProvider;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RecommendationService>,
    pub weather: Arc<dyn WeatherProvider>,
}

impl AppState {
    pub fn new(service: RecommendationService, weather: Arc<dyn WeatherProvider>) -> Self {
        Self {
            service: Arc::new(service),
            weather,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/recommendations", post(create_recommendations))
        .route("/current-weather", post(get_current_weather))
        .route("/playgrounds", post(search_playgrounds))
        .route("/playgrounds/{id}", get(get_playground))
        .route("/health", get(health))
        .with_state(state)
}

/// Unreadable bodies are reported like any other invalid field
fn json_body(body: Result<Json<Value>, JsonRejection>, message: &str) -> crate::Result<Value> {
    body.map(|Json(value)| value).map_err(|rejection| {
        KidsWeatherError::validation(message, vec![FieldError::new("body", rejection.body_text())])
    })
}

async fn create_recommendations(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, KidsWeatherError> {
    let body = json_body(body, validation::INVALID_WEATHER_INPUT)?;
    let input = validation::weather_input(&body)?;
    Ok(Json(state.service.get_clothing_recommendations(input)))
}

async fn get_current_weather(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CurrentWeather>, KidsWeatherError> {
    let body = json_body(body, validation::INVALID_COORDINATES)?;
    let location = validation::current_weather_request(&body)?;
    let current = state.weather.current_weather(location).await?;
    Ok(Json(current))
}

async fn search_playgrounds(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PlaygroundResponse>, KidsWeatherError> {
    let body = json_body(body, validation::INVALID_REQUEST_DATA)?;
    let request = validation::playground_request(&body)?;
    Ok(Json(state.service.get_playground_recommendations(request)))
}

async fn get_playground(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<ScoredPlayground>, KidsWeatherError> {
    let location = validation::query_coordinates(query.lat.as_deref(), query.lng.as_deref())?;
    let venue = state.service.get_playground_details(&id, location)?;
    Ok(Json(venue))
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: crate::VERSION,
        timestamp: Utc::now(),
    })
}
