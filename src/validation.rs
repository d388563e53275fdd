//! Validation of raw JSON requests into domain inputs
//!
//! Every check runs before anything is rejected so callers get the complete
//! list of offending fields in one response.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{FieldError, KidsWeatherError};
use crate::models::{AgeGroup, Condition, Coordinates, PlaygroundRequest, WeatherInput};

pub const INVALID_WEATHER_INPUT: &str = "Invalid weather input";
pub const INVALID_REQUEST_DATA: &str = "Invalid request data";
pub const INVALID_COORDINATES: &str = "Location coordinates are required";

const TEMPERATURE_RANGE: (f64, f64) = (-50.0, 50.0);
const HUMIDITY_RANGE: (f64, f64) = (0.0, 100.0);
const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
const RADIUS_RANGE: (f64, f64) = (1.0, 50.0);

/// Validate a clothing request body
pub fn weather_input(body: &Value) -> crate::Result<WeatherInput> {
    let mut errors = Vec::new();
    let input = as_object(body, "body", &mut errors)
        .and_then(|object| weather_fields(object, "", &mut errors));
    finish(input, errors, INVALID_WEATHER_INPUT)
}

/// Validate a playground search body
pub fn playground_request(body: &Value) -> crate::Result<PlaygroundRequest> {
    let mut errors = Vec::new();
    let request = as_object(body, "body", &mut errors).and_then(|object| {
        let weather_input = match object.get("weatherInput") {
            Some(value) => as_object(value, "weatherInput", &mut errors)
                .and_then(|inner| weather_fields(inner, "weatherInput.", &mut errors)),
            None => {
                errors.push(FieldError::new("weatherInput", "is required"));
                None
            }
        };
        let location = match object.get("location") {
            Some(value) => as_object(value, "location", &mut errors)
                .and_then(|inner| coordinates(inner, ("lat", "lng"), "location.", &mut errors)),
            None => {
                errors.push(FieldError::new("location", "is required"));
                None
            }
        };
        let radius = optional_number(object, "radius", "radius", RADIUS_RANGE, &mut errors);

        Some(PlaygroundRequest {
            weather_input: weather_input?,
            location: location?,
            radius: radius?,
        })
    });
    finish(request, errors, INVALID_REQUEST_DATA)
}

/// Validate a `{latitude, longitude}` body for the current weather lookup
pub fn current_weather_request(body: &Value) -> crate::Result<Coordinates> {
    let mut errors = Vec::new();
    let location = as_object(body, "body", &mut errors)
        .and_then(|object| coordinates(object, ("latitude", "longitude"), "", &mut errors));
    finish(location, errors, INVALID_COORDINATES)
}

/// Validate `lat`/`lng` query parameters
pub fn query_coordinates(lat: Option<&str>, lng: Option<&str>) -> crate::Result<Coordinates> {
    let mut errors = Vec::new();
    let lat = query_number("lat", lat, LATITUDE_RANGE, &mut errors);
    let lng = query_number("lng", lng, LONGITUDE_RANGE, &mut errors);
    let location = lat.zip(lng).map(|(lat, lng)| Coordinates::new(lat, lng));
    finish(location, errors, INVALID_COORDINATES)
}

fn finish<T>(value: Option<T>, errors: Vec<FieldError>, message: &str) -> crate::Result<T> {
    match value {
        Some(value) if errors.is_empty() => Ok(value),
        _ => Err(KidsWeatherError::validation(message, errors)),
    }
}

fn as_object<'a>(
    value: &'a Value,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a Map<String, Value>> {
    let object = value.as_object();
    if object.is_none() {
        errors.push(FieldError::new(field, "must be a JSON object"));
    }
    object
}

fn weather_fields(
    object: &Map<String, Value>,
    prefix: &str,
    errors: &mut Vec<FieldError>,
) -> Option<WeatherInput> {
    let temperature = required_number(
        object,
        "temperature",
        &format!("{prefix}temperature"),
        TEMPERATURE_RANGE,
        errors,
    );
    let humidity_field = format!("{prefix}humidity");
    let humidity = required_number(object, "humidity", &humidity_field, HUMIDITY_RANGE, errors)
        .and_then(|humidity| whole_percent(humidity, &humidity_field, errors));
    let condition: Option<Condition> =
        required_enum(object, "condition", &format!("{prefix}condition"), errors);
    let age_group: Option<AgeGroup> =
        required_enum(object, "ageGroup", &format!("{prefix}ageGroup"), errors);

    Some(WeatherInput::new(
        temperature?,
        humidity?,
        condition?,
        age_group?,
    ))
}

fn coordinates(
    object: &Map<String, Value>,
    (lat_key, lng_key): (&str, &str),
    prefix: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Coordinates> {
    let lat = required_number(
        object,
        lat_key,
        &format!("{prefix}{lat_key}"),
        LATITUDE_RANGE,
        errors,
    );
    let lng = required_number(
        object,
        lng_key,
        &format!("{prefix}{lng_key}"),
        LONGITUDE_RANGE,
        errors,
    );
    Some(Coordinates::new(lat?, lng?))
}

/// Range-checked finite number, reporting a field error when absent
fn required_number(
    object: &Map<String, Value>,
    key: &str,
    field: &str,
    range: (f64, f64),
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    match object.get(key) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
        Some(value) => checked_number(value, field, range, errors),
    }
}

/// `Some(None)` when the key is absent, `None` when the value is invalid
fn optional_number(
    object: &Map<String, Value>,
    key: &str,
    field: &str,
    range: (f64, f64),
    errors: &mut Vec<FieldError>,
) -> Option<Option<f64>> {
    match object.get(key) {
        None | Some(Value::Null) => Some(None),
        Some(value) => checked_number(value, field, range, errors).map(Some),
    }
}

fn checked_number(
    value: &Value,
    field: &str,
    range: (f64, f64),
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    match value.as_f64() {
        Some(number) => in_range(number, field, range, errors),
        None => {
            errors.push(FieldError::new(field, "must be a number"));
            None
        }
    }
}

fn query_number(
    field: &str,
    raw: Option<&str>,
    range: (f64, f64),
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        errors.push(FieldError::new(field, "is required"));
        return None;
    };
    match raw.parse::<f64>() {
        Ok(number) => in_range(number, field, range, errors),
        Err(_) => {
            errors.push(FieldError::new(field, "must be a number"));
            None
        }
    }
}

fn in_range(
    number: f64,
    field: &str,
    (min, max): (f64, f64),
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    if !number.is_finite() {
        errors.push(FieldError::new(field, "must be a finite number"));
        None
    } else if number < min || number > max {
        errors.push(FieldError::new(
            field,
            format!("must be between {min} and {max}"),
        ));
        None
    } else {
        Some(number)
    }
}

fn required_enum<T>(
    object: &Map<String, Value>,
    key: &str,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<T>
where
    T: FromStr<Err = String>,
{
    let parsed = match object.get(key) {
        None | Some(Value::Null) => Err("is required".to_string()),
        Some(Value::String(s)) => s.parse(),
        Some(_) => Err("must be a string".to_string()),
    };
    parsed
        .map_err(|message| errors.push(FieldError::new(field, message)))
        .ok()
}

/// Range-checked humidity that must already be a whole percent
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_percent(humidity: f64, field: &str, errors: &mut Vec<FieldError>) -> Option<u8> {
    if humidity.fract() == 0.0 {
        Some(humidity as u8)
    } else {
        errors.push(FieldError::new(field, "must be a whole number"));
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn field_errors(result: crate::Result<impl std::fmt::Debug>) -> (String, Vec<String>) {
        match result {
            Err(KidsWeatherError::Validation { message, errors }) => {
                (message, errors.into_iter().map(|e| e.field).collect())
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_weather_input() {
        let input = weather_input(&json!({
            "temperature": 18.5,
            "humidity": 60,
            "condition": "rainy",
            "ageGroup": "preschool"
        }))
        .unwrap();
        assert_eq!(
            input,
            WeatherInput::new(18.5, 60, Condition::Rainy, AgeGroup::Preschool)
        );
    }

    #[test]
    fn test_all_offending_fields_are_reported() {
        let (message, fields) = field_errors(weather_input(&json!({
            "temperature": 51,
            "humidity": -1,
            "condition": "windy",
            "ageGroup": 3
        })));
        assert_eq!(message, INVALID_WEATHER_INPUT);
        assert_eq!(
            fields,
            vec!["temperature", "humidity", "condition", "ageGroup"]
        );
    }

    #[rstest]
    #[case(json!(-50), true)]
    #[case(json!(50), true)]
    #[case(json!(-50.1), false)]
    #[case(json!("20"), false)]
    #[case(json!(null), false)]
    fn test_temperature_bounds(#[case] temperature: Value, #[case] valid: bool) {
        let result = weather_input(&json!({
            "temperature": temperature,
            "humidity": 50,
            "condition": "sunny",
            "ageGroup": "toddler"
        }));
        assert_eq!(result.is_ok(), valid);
    }

    #[rstest]
    #[case(json!(85.4))]
    #[case(json!(70.4))]
    #[case(json!(29.6))]
    fn test_fractional_humidity_is_rejected(#[case] humidity: Value) {
        let (message, fields) = field_errors(weather_input(&json!({
            "temperature": 20,
            "humidity": humidity,
            "condition": "cloudy",
            "ageGroup": "school"
        })));
        assert_eq!(message, INVALID_WEATHER_INPUT);
        assert_eq!(fields, vec!["humidity"]);
    }

    #[test]
    fn test_whole_float_humidity_is_accepted() {
        let input = weather_input(&json!({
            "temperature": 20,
            "humidity": 86.0,
            "condition": "cloudy",
            "ageGroup": "school"
        }))
        .unwrap();
        assert_eq!(input.humidity, 86);
    }

    #[test]
    fn test_non_object_body() {
        let (_, fields) = field_errors(weather_input(&json!([1, 2, 3])));
        assert_eq!(fields, vec!["body"]);
    }

    #[test]
    fn test_valid_playground_request() {
        let request = playground_request(&json!({
            "weatherInput": {
                "temperature": 18,
                "humidity": 60,
                "condition": "rainy",
                "ageGroup": "preschool"
            },
            "location": { "lat": 35.68, "lng": 139.69 },
            "radius": 50
        }))
        .unwrap();
        assert_eq!(request.location, Coordinates::new(35.68, 139.69));
        assert_eq!(request.radius, Some(50.0));
        assert_eq!(request.weather_input.age_group, AgeGroup::Preschool);
    }

    #[test]
    fn test_radius_is_optional() {
        let request = playground_request(&json!({
            "weatherInput": {
                "temperature": 18,
                "humidity": 60,
                "condition": "sunny",
                "ageGroup": "school"
            },
            "location": { "lat": 35.68, "lng": 139.69 }
        }))
        .unwrap();
        assert_eq!(request.radius, None);
    }

    #[test]
    fn test_playground_request_nested_fields() {
        let (message, fields) = field_errors(playground_request(&json!({
            "weatherInput": {
                "temperature": 18,
                "humidity": 60,
                "condition": "foggy",
                "ageGroup": "preschool"
            },
            "location": { "lat": 91, "lng": 139.69 },
            "radius": 0.5
        })));
        assert_eq!(message, INVALID_REQUEST_DATA);
        assert_eq!(
            fields,
            vec!["weatherInput.condition", "location.lat", "radius"]
        );
    }

    #[test]
    fn test_playground_request_missing_sections() {
        let (_, fields) = field_errors(playground_request(&json!({})));
        assert_eq!(fields, vec!["weatherInput", "location"]);
    }

    #[test]
    fn test_current_weather_request() {
        let location =
            current_weather_request(&json!({ "latitude": 35.68, "longitude": 139.69 })).unwrap();
        assert_eq!(location, Coordinates::new(35.68, 139.69));

        let (_, fields) = field_errors(current_weather_request(&json!({ "latitude": 35.68 })));
        assert_eq!(fields, vec!["longitude"]);
    }

    #[rstest]
    #[case(Some("35.68"), Some("139.69"), true)]
    #[case(None, Some("139.69"), false)]
    #[case(Some("abc"), Some("139.69"), false)]
    #[case(Some("35.68"), Some("181"), false)]
    #[case(Some(""), Some(""), false)]
    fn test_query_coordinates(
        #[case] lat: Option<&str>,
        #[case] lng: Option<&str>,
        #[case] valid: bool,
    ) {
        assert_eq!(query_coordinates(lat, lng).is_ok(), valid);
    }
}
