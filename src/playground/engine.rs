//! Playground scoring, filtering and ranking

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use super::catalog::PlaygroundCatalog;
use crate::config::PlaygroundConfig;
use crate::models::{Coordinates, PlaygroundVenue, ScoredPlayground, VenueCategory, WeatherInput};

/// Categories still allowed at a given temperature
///
/// Checked from the most extreme band inward; only the first matching band applies.
#[must_use]
pub fn category_allowed(temperature: f64, category: VenueCategory) -> bool {
    use VenueCategory::{Adventure, Covered, Educational, Indoor, Outdoor, Water};

    match temperature {
        t if t < -5.0 => matches!(category, Indoor | Covered),
        t if t < 5.0 => matches!(category, Indoor | Covered | Educational),
        t if t < 20.0 => category != Water,
        t if t > 35.0 => !matches!(category, Outdoor | Adventure),
        _ => true,
    }
}

#[derive(Debug, Clone)]
pub struct PlaygroundEngine {
    catalog: Arc<PlaygroundCatalog>,
    max_results: usize,
    default_radius_km: f64,
    enforce_radius: bool,
    score_tolerance: u8,
}

impl PlaygroundEngine {
    #[must_use]
    pub fn new(catalog: Arc<PlaygroundCatalog>, config: &PlaygroundConfig) -> Self {
        Self {
            catalog,
            max_results: config.max_results,
            default_radius_km: config.default_radius_km,
            enforce_radius: config.enforce_radius,
            score_tolerance: config.score_tolerance,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &PlaygroundCatalog {
        &self.catalog
    }

    /// Rank venues for the input around `origin`
    #[must_use]
    pub fn recommend(
        &self,
        input: &WeatherInput,
        origin: &Coordinates,
        radius_km: Option<f64>,
    ) -> Vec<ScoredPlayground> {
        let radius = radius_km.unwrap_or(self.default_radius_km);

        let mut candidates: Vec<ScoredPlayground> = self
            .catalog
            .venues()
            .iter()
            .filter(|v| v.supports(input.age_group))
            .filter(|v| v.temperature_exempt || category_allowed(input.temperature, v.category))
            .map(|v| score(v, input, origin))
            .filter(|s| !self.enforce_radius || s.distance_km.is_none_or(|d| d <= radius))
            .collect();

        let candidate_count = candidates.len();
        candidates.sort_by(compare_strict);
        candidates.truncate(self.max_results);
        let ranked = order_by_tiers(candidates, self.score_tolerance);

        debug!(
            condition = %input.condition,
            age_group = %input.age_group,
            radius_km = radius,
            candidates = candidate_count,
            returned = ranked.len(),
            "Ranked playgrounds"
        );
        ranked
    }

    /// A single venue with its distance from `origin`
    #[must_use]
    pub fn details(&self, id: &str, origin: &Coordinates) -> Option<ScoredPlayground> {
        self.catalog.get(id).map(|venue| ScoredPlayground {
            venue: venue.clone(),
            // details are condition-agnostic, report the best case
            weather_score: venue.weather_suitability.max(),
            distance_km: venue.coordinates.map(|c| origin.distance_km(&c)),
        })
    }
}

fn score(venue: &PlaygroundVenue, input: &WeatherInput, origin: &Coordinates) -> ScoredPlayground {
    ScoredPlayground {
        venue: venue.clone(),
        weather_score: venue.weather_suitability.score(input.condition),
        distance_km: venue.coordinates.map(|c| origin.distance_km(&c)),
    }
}

/// Unknown distances sort after every known one
fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    a.unwrap_or(f64::INFINITY)
        .total_cmp(&b.unwrap_or(f64::INFINITY))
}

/// Score descending, then distance ascending, then id
fn compare_strict(a: &ScoredPlayground, b: &ScoredPlayground) -> Ordering {
    b.weather_score
        .cmp(&a.weather_score)
        .then_with(|| compare_distance(a.distance_km, b.distance_km))
        .then_with(|| a.venue.id.cmp(b.venue.id))
}

/// Group strictly ranked venues into tiers of scores within `tolerance` of the
/// tier's best score and order each tier by distance
fn order_by_tiers(ranked: Vec<ScoredPlayground>, tolerance: u8) -> Vec<ScoredPlayground> {
    let mut ordered = Vec::with_capacity(ranked.len());
    let mut remaining = ranked.into_iter().peekable();

    while let Some(top) = remaining.peek().map(|s| s.weather_score) {
        let floor = top.saturating_sub(tolerance);
        let mut tier = Vec::new();
        while let Some(next) = remaining.next_if(|s| s.weather_score >= floor) {
            tier.push(next);
        }
        tier.sort_by(|a, b| {
            compare_distance(a.distance_km, b.distance_km).then_with(|| compare_strict(a, b))
        });
        ordered.extend(tier);
    }
    ordered
}
