//! Error types and handling for the `KidsWeather` service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// A single rejected input field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Main error type for the `KidsWeather` service
#[derive(Error, Debug)]
pub enum KidsWeatherError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Weather provider communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors, one entry per offending field
    #[error("Invalid input: {message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    /// Requested resource does not exist
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Reference data that breaks a catalog invariant
    #[error("Catalog error: {message}")]
    Catalog { message: String },
}

impl KidsWeatherError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a validation error carrying the offending fields
    pub fn validation<S: Into<String>>(message: S, errors: Vec<FieldError>) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// HTTP status the error maps to
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            KidsWeatherError::Validation { .. } => StatusCode::BAD_REQUEST,
            KidsWeatherError::NotFound { .. } => StatusCode::NOT_FOUND,
            KidsWeatherError::Api { .. } => StatusCode::BAD_GATEWAY,
            KidsWeatherError::Config { .. } | KidsWeatherError::Catalog { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            KidsWeatherError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            KidsWeatherError::Api { .. } => {
                "Unable to fetch current weather. Please try again later.".to_string()
            }
            KidsWeatherError::Validation { message, .. } => message.clone(),
            KidsWeatherError::NotFound { message } => message.clone(),
            KidsWeatherError::Catalog { .. } => {
                "Reference data is inconsistent. Please contact the operator.".to_string()
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

impl IntoResponse for KidsWeatherError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            message: self.user_message(),
            errors: match self {
                KidsWeatherError::Validation { errors, .. } => errors,
                _ => Vec::new(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = KidsWeatherError::config("bad port");
        assert!(matches!(config_err, KidsWeatherError::Config { .. }));

        let api_err = KidsWeatherError::api("connection failed");
        assert!(matches!(api_err, KidsWeatherError::Api { .. }));

        let validation_err = KidsWeatherError::validation(
            "Invalid weather input",
            vec![FieldError::new("humidity", "must be between 0 and 100")],
        );
        assert!(matches!(validation_err, KidsWeatherError::Validation { .. }));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            KidsWeatherError::validation("x", vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            KidsWeatherError::not_found("venue").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            KidsWeatherError::api("timeout").status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            KidsWeatherError::catalog("duplicate id").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_user_messages() {
        let config_err = KidsWeatherError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let api_err = KidsWeatherError::api("test");
        assert!(api_err.user_message().contains("Unable to fetch"));

        let validation_err = KidsWeatherError::validation("Invalid request data", vec![]);
        assert_eq!(validation_err.user_message(), "Invalid request data");
    }

    #[tokio::test]
    async fn test_internal_errors_hide_details() {
        let response = KidsWeatherError::catalog("duplicate venue id 'x'").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "message": "Reference data is inconsistent. Please contact the operator."
            })
        );
    }
}
