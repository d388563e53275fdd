//! Weather input model and its closed enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sky condition as reported by the caller or derived from a weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Sunny,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Snowy,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Sunny => "sunny",
            Condition::Cloudy => "cloudy",
            Condition::Rainy => "rainy",
            Condition::Snowy => "snowy",
        }
    }

    /// Map a WMO weather code to the four supported conditions
    ///
    /// Codes 0-1 are clear, 2-3 overcast, up to 67 drizzle and rain,
    /// up to 86 snow. Thunderstorms (95+) fall back to cloudy.
    #[must_use]
    pub fn from_weather_code(code: i32) -> Self {
        match code {
            c if c <= 1 => Condition::Sunny,
            c if c <= 3 => Condition::Cloudy,
            c if c <= 67 => Condition::Rainy,
            c if c <= 86 => Condition::Snowy,
            _ => Condition::Cloudy,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("must be one of: sunny, cloudy, rainy, snowy (got '{s}')"))
    }
}

/// Age bracket of the child the recommendation is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    /// 1-3 years
    Toddler,
    /// 3-6 years
    Preschool,
    /// 6-12 years
    School,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 3] = [AgeGroup::Toddler, AgeGroup::Preschool, AgeGroup::School];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Toddler => "toddler",
            AgeGroup::Preschool => "preschool",
            AgeGroup::School => "school",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeGroup::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("must be one of: toddler, preschool, school (got '{s}')"))
    }
}

/// Validated weather input driving both recommendation engines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherInput {
    /// Temperature in Celsius, within [-50, 50]
    pub temperature: f64,
    /// Relative humidity in percent, within [0, 100]
    pub humidity: u8,
    pub condition: Condition,
    pub age_group: AgeGroup,
}

impl WeatherInput {
    #[must_use]
    pub fn new(temperature: f64, humidity: u8, condition: Condition, age_group: AgeGroup) -> Self {
        Self {
            temperature,
            humidity,
            condition,
            age_group,
        }
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", self.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Condition::Sunny)]
    #[case(1, Condition::Sunny)]
    #[case(2, Condition::Cloudy)]
    #[case(3, Condition::Cloudy)]
    #[case(45, Condition::Rainy)]
    #[case(61, Condition::Rainy)]
    #[case(67, Condition::Rainy)]
    #[case(71, Condition::Snowy)]
    #[case(86, Condition::Snowy)]
    #[case(95, Condition::Cloudy)]
    fn test_weather_code_mapping(#[case] code: i32, #[case] expected: Condition) {
        assert_eq!(Condition::from_weather_code(code), expected);
    }

    #[test]
    fn test_condition_parsing() {
        assert_eq!("rainy".parse::<Condition>(), Ok(Condition::Rainy));
        assert!("stormy".parse::<Condition>().is_err());
        assert!("Sunny".parse::<Condition>().is_err());
    }

    #[test]
    fn test_age_group_parsing() {
        assert_eq!("preschool".parse::<AgeGroup>(), Ok(AgeGroup::Preschool));
        assert!("teen".parse::<AgeGroup>().is_err());
    }

    #[test]
    fn test_weather_input_serializes_camel_case() {
        let input = WeatherInput::new(22.5, 60, Condition::Cloudy, AgeGroup::School);
        let json = serde_json::to_value(input).unwrap();
        assert_eq!(json["ageGroup"], "school");
        assert_eq!(json["condition"], "cloudy");
        assert_eq!(json["humidity"], 60);
        assert_eq!(input.format_temperature(), "22.5°C");
    }
}
