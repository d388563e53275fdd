//! Configuration management for the `KidsWeather` service
//!
//! Handles loading configuration from an optional TOML file and
//! `KIDSWEATHER__SECTION__KEY` environment variables, and validates
//! every setting before the server starts.

use crate::KidsWeatherError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "KIDSWEATHER_CONFIG";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KidsWeatherConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub clothing: ClothingConfig,
    #[serde(default)]
    pub playgrounds: PlaygroundConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Whole-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Maximum accepted request body in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

/// Weather provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the Open-Meteo API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u64,
    /// Maximum number of retries for transient failures
    #[serde(default = "default_weather_max_retries")]
    pub max_retries: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// How the basic accessory pool is sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessoryDrawMode {
    /// Fresh entropy for every request
    Random,
    /// Deterministic draw from `accessory_seed`
    Seeded,
    /// First entries of the pool, no randomness
    TopN,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothingConfig {
    #[serde(default = "default_accessory_draw")]
    pub accessory_draw: AccessoryDrawMode,
    #[serde(default = "default_accessory_seed")]
    pub accessory_seed: u64,
    /// Upper bound on basic accessories added per response
    #[serde(default = "default_basic_accessory_count")]
    pub basic_accessory_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaygroundConfig {
    /// Radius used when a request omits one
    #[serde(default = "default_radius")]
    pub default_radius_km: f64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Drop venues farther than the requested radius
    #[serde(default = "default_enforce_radius")]
    pub enforce_radius: bool,
    /// Score gap within which nearer venues are listed first
    #[serde(default = "default_score_tolerance")]
    pub score_tolerance: u8,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_body_limit() -> usize {
    64 * 1024
}

fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_weather_timeout() -> u64 {
    10
}

fn default_weather_max_retries() -> u32 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_accessory_draw() -> AccessoryDrawMode {
    AccessoryDrawMode::Random
}

fn default_accessory_seed() -> u64 {
    42
}

fn default_basic_accessory_count() -> usize {
    3
}

fn default_radius() -> f64 {
    10.0
}

fn default_max_results() -> usize {
    7
}

fn default_enforce_radius() -> bool {
    true
}

fn default_score_tolerance() -> u8 {
    2
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_seconds: default_weather_timeout(),
            max_retries: default_weather_max_retries(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ClothingConfig {
    fn default() -> Self {
        Self {
            accessory_draw: default_accessory_draw(),
            accessory_seed: default_accessory_seed(),
            basic_accessory_count: default_basic_accessory_count(),
        }
    }
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            default_radius_km: default_radius(),
            max_results: default_max_results(),
            enforce_radius: default_enforce_radius(),
            score_tolerance: default_score_tolerance(),
        }
    }
}

impl KidsWeatherConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        Self::load_from_path(explicit)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // KIDSWEATHER__PLAYGROUNDS__MAX_RESULTS=5
        builder = builder.add_source(
            Environment::with_prefix("KIDSWEATHER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: KidsWeatherConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kidsweather").join("config.toml"))
    }

    /// Apply default values to empty or zeroed fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.request_timeout_seconds == 0 {
            self.server.request_timeout_seconds = default_request_timeout();
        }
        if self.server.body_limit_bytes == 0 {
            self.server.body_limit_bytes = default_body_limit();
        }
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_weather_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.playgrounds.default_radius_km == 0.0 {
            self.playgrounds.default_radius_km = default_radius();
        }
        if self.playgrounds.max_results == 0 {
            self.playgrounds.max_results = default_max_results();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.request_timeout_seconds > 300 {
            return Err(KidsWeatherError::config("Request timeout cannot exceed 300 seconds").into());
        }

        if self.weather.timeout_seconds > 120 {
            return Err(
                KidsWeatherError::config("Weather API timeout cannot exceed 120 seconds").into(),
            );
        }

        if self.weather.max_retries > 10 {
            return Err(KidsWeatherError::config("Weather API max retries cannot exceed 10").into());
        }

        if !(1.0..=50.0).contains(&self.playgrounds.default_radius_km) {
            return Err(KidsWeatherError::config(
                "Default playground radius must be between 1 and 50 km",
            )
            .into());
        }

        if self.playgrounds.max_results > 50 {
            return Err(
                KidsWeatherError::config("Maximum playground results cannot exceed 50").into(),
            );
        }

        if self.playgrounds.score_tolerance > 10 {
            return Err(KidsWeatherError::config("Score tolerance cannot exceed 10").into());
        }

        if self.clothing.basic_accessory_count > 5 {
            return Err(
                KidsWeatherError::config("Basic accessory count cannot exceed 5").into(),
            );
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(KidsWeatherError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(KidsWeatherError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(KidsWeatherError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = KidsWeatherConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.weather.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.weather.max_retries, 3);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.clothing.accessory_draw, AccessoryDrawMode::Random);
        assert_eq!(config.clothing.basic_accessory_count, 3);
        assert_eq!(config.playgrounds.default_radius_km, 10.0);
        assert_eq!(config.playgrounds.max_results, 7);
        assert_eq!(config.playgrounds.score_tolerance, 2);
        assert!(config.playgrounds.enforce_radius);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = KidsWeatherConfig::default();
        config.logging.level = "verbose".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = KidsWeatherConfig::default();
        config.playgrounds.default_radius_km = 80.0;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("radius"));
    }

    #[test]
    fn test_config_validation_base_url() {
        let mut config = KidsWeatherConfig::default();
        config.weather.base_url = "api.open-meteo.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_zeroes() {
        let mut config = KidsWeatherConfig::default();
        config.weather.timeout_seconds = 0;
        config.playgrounds.max_results = 0;
        config.logging.format = String::new();
        config.apply_defaults();
        assert_eq!(config.weather.timeout_seconds, 10);
        assert_eq!(config.playgrounds.max_results, 7);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "kidsweather-config-test-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[clothing]\naccessory_draw = \"seeded\"\naccessory_seed = 7\n\n[playgrounds]\nmax_results = 5\nscore_tolerance = 0"
        )
        .unwrap();

        let config = KidsWeatherConfig::load_from_path(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.clothing.accessory_draw, AccessoryDrawMode::Seeded);
        assert_eq!(config.clothing.accessory_seed, 7);
        assert_eq!(config.playgrounds.max_results, 5);
        assert_eq!(config.playgrounds.score_tolerance, 0);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = KidsWeatherConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("kidsweather"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
