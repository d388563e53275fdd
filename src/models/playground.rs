//! Playground venue reference data and scored results

use serde::{Deserialize, Serialize};

use super::location::Coordinates;
use super::weather::{AgeGroup, Condition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueCategory {
    Indoor,
    Outdoor,
    Covered,
    Water,
    Educational,
    Adventure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cost {
    Free,
    Low,
    Medium,
    High,
}

/// Suitability score per sky condition, each 0-10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSuitability {
    pub sunny: u8,
    pub cloudy: u8,
    pub rainy: u8,
    pub snowy: u8,
}

impl WeatherSuitability {
    #[must_use]
    pub const fn new(sunny: u8, cloudy: u8, rainy: u8, snowy: u8) -> Self {
        Self {
            sunny,
            cloudy,
            rainy,
            snowy,
        }
    }

    #[must_use]
    pub fn score(&self, condition: Condition) -> u8 {
        match condition {
            Condition::Sunny => self.sunny,
            Condition::Cloudy => self.cloudy,
            Condition::Rainy => self.rainy,
            Condition::Snowy => self.snowy,
        }
    }

    /// Highest individual score, used for range checks
    #[must_use]
    pub fn max(&self) -> u8 {
        self.sunny.max(self.cloudy).max(self.rainy).max(self.snowy)
    }
}

/// A venue in the static playground catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundVenue {
    pub id: &'static str,
    pub name: &'static str,
    pub official_name: &'static str,
    pub category: VenueCategory,
    pub description: &'static str,
    pub weather_suitability: WeatherSuitability,
    pub age_groups: &'static [AgeGroup],
    pub features: &'static [&'static str],
    pub safety_notes: &'static [&'static str],
    pub estimated_duration: &'static str,
    pub cost: Cost,
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    /// Kept by the temperature filter regardless of category (heated bathing venues)
    #[serde(skip)]
    pub temperature_exempt: bool,
}

impl PlaygroundVenue {
    #[must_use]
    pub fn supports(&self, age_group: AgeGroup) -> bool {
        self.age_groups.contains(&age_group)
    }
}

/// A venue with the scores derived for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPlayground {
    #[serde(flatten)]
    pub venue: PlaygroundVenue,
    pub weather_score: u8,
    /// Straight-line distance from the request location, absent without venue coordinates
    pub distance_km: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suitability_lookup_is_total() {
        let suitability = WeatherSuitability::new(7, 8, 9, 10);
        let scores: Vec<u8> = Condition::ALL
            .into_iter()
            .map(|c| suitability.score(c))
            .collect();
        assert_eq!(scores, vec![7, 8, 9, 10]);
        assert_eq!(suitability.max(), 10);
    }

    #[test]
    fn test_scored_playground_flattens_venue() {
        let venue = PlaygroundVenue {
            id: "test-park",
            name: "Test Park",
            official_name: "Test Municipal Park",
            category: VenueCategory::Outdoor,
            description: "A park.",
            weather_suitability: WeatherSuitability::new(9, 8, 2, 4),
            age_groups: &[AgeGroup::Toddler],
            features: &["Slides"],
            safety_notes: &[],
            estimated_duration: "1-2 hours",
            cost: Cost::Free,
            coordinates: None,
            map_url: None,
            temperature_exempt: false,
        };
        assert!(venue.supports(AgeGroup::Toddler));
        assert!(!venue.supports(AgeGroup::School));

        let scored = ScoredPlayground {
            venue,
            weather_score: 9,
            distance_km: None,
        };
        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["id"], "test-park");
        assert_eq!(json["officialName"], "Test Municipal Park");
        assert_eq!(json["weatherScore"], 9);
        assert!(json["distanceKm"].is_null());
        assert_eq!(json["weatherSuitability"]["rainy"], 2);
        assert!(json.get("temperatureExempt").is_none());
    }
}
