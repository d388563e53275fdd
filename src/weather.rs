//! Current weather lookup through Open-Meteo
//!
//! The provider is a trait so the HTTP layer can be exercised without the
//! network. [`OpenMeteoProvider`] retries transient failures with exponential
//! backoff before reporting an API error.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::WeatherConfig;
use crate::error::KidsWeatherError;
use crate::models::{Condition, Coordinates, CurrentWeather};

const USER_AGENT: &str = concat!("KidsWeather/", env!("CARGO_PKG_VERSION"));

/// Source of current conditions at a coordinate
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(&self, location: Coordinates) -> crate::Result<CurrentWeather>;
}

#[derive(Clone)]
pub struct OpenMeteoProvider {
    client: ClientWithMiddleware,
    base_url: String,
}

impl OpenMeteoProvider {
    pub fn new(config: &WeatherConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build weather HTTP client")?;
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let client = ClientBuilder::new(http)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn forecast_url(&self, location: &Coordinates) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current=temperature_2m,relative_humidity_2m,weather_code&timezone=auto",
            self.base_url, location.lat, location.lng
        )
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    #[instrument(skip(self), fields(lat = location.lat, lng = location.lng))]
    async fn current_weather(&self, location: Coordinates) -> crate::Result<CurrentWeather> {
        let url = self.forecast_url(&location);
        debug!(url = %url, "Requesting current weather");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(error = %e, "Weather request failed");
            KidsWeatherError::api(format!("Weather request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Weather provider returned an error status");
            return Err(KidsWeatherError::api(format!(
                "Weather provider returned status {status}"
            )));
        }

        let body: ForecastResponse = response.json().await.map_err(|e| {
            KidsWeatherError::api(format!("Failed to parse weather response: {e}"))
        })?;

        Ok(body.current.into_current_weather(&location))
    }
}

/// Subset of the Open-Meteo forecast response requested above
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentData,
}

#[derive(Debug, Deserialize)]
struct CurrentData {
    #[serde(rename = "temperature_2m")]
    temperature: f64,
    #[serde(rename = "relative_humidity_2m")]
    humidity: f64,
    weather_code: i32,
}

impl CurrentData {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn into_current_weather(self, location: &Coordinates) -> CurrentWeather {
        CurrentWeather {
            temperature: self.temperature.round() as i32,
            humidity: self.humidity.round().clamp(0.0, 100.0) as u8,
            condition: Condition::from_weather_code(self.weather_code),
            location: location.format_coordinates(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_forecast_url() {
        let provider = OpenMeteoProvider::new(&WeatherConfig {
            base_url: "https://api.open-meteo.com/v1/".to_string(),
            ..WeatherConfig::default()
        })
        .unwrap();
        let url = provider.forecast_url(&Coordinates::new(35.68, 139.69));
        assert_eq!(
            url,
            "https://api.open-meteo.com/v1/forecast?latitude=35.68&longitude=139.69&current=temperature_2m,relative_humidity_2m,weather_code&timezone=auto"
        );
    }

    #[test]
    fn test_parse_open_meteo_response() {
        let payload = r#"{
            "latitude": 35.7,
            "longitude": 139.6875,
            "timezone": "Asia/Tokyo",
            "current": {
                "time": "2026-10-18T09:00",
                "interval": 900,
                "temperature_2m": 18.6,
                "relative_humidity_2m": 64,
                "weather_code": 61
            }
        }"#;
        let parsed: ForecastResponse = serde_json::from_str(payload).unwrap();
        let current = parsed
            .current
            .into_current_weather(&Coordinates::new(35.6812, 139.6903));
        assert_eq!(
            current,
            CurrentWeather {
                temperature: 19,
                humidity: 64,
                condition: Condition::Rainy,
                location: "35.68, 139.69".to_string(),
            }
        );
    }

    #[rstest]
    #[case(0, Condition::Sunny)]
    #[case(3, Condition::Cloudy)]
    #[case(45, Condition::Rainy)]
    #[case(73, Condition::Snowy)]
    #[case(95, Condition::Cloudy)]
    fn test_weather_code_reaches_condition(#[case] code: i32, #[case] expected: Condition) {
        let current = CurrentData {
            temperature: -0.4,
            humidity: 50.0,
            weather_code: code,
        }
        .into_current_weather(&Coordinates::new(0.0, 0.0));
        assert_eq!(current.condition, expected);
        assert_eq!(current.temperature, 0);
    }
}
