//! Clothing recommendation engine
//!
//! Combines the temperature band for the input with the base outfit for the
//! sky condition and age group, appends accessories and extreme-temperature
//! safety items, then annotates garments for humidity.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, warn};

use super::bands::{self, TEMPERATURE_PLACEHOLDER};
use super::catalog::{self, AccessoryTemplate, ItemTemplate};
use crate::config::{AccessoryDrawMode, ClothingConfig};
use crate::models::{AgeGroup, ClothingCategory, ClothingItem, WeatherInput};

/// Above this temperature cooling aids are added
const HEAT_SAFETY_THRESHOLD: f64 = 30.0;
/// Below this temperature emergency warming aids are added
const COLD_SAFETY_THRESHOLD: f64 = 5.0;

/// Strategy for picking from the basic accessory pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessoryDraw {
    Random,
    Seeded(u64),
    TopN,
}

impl From<&ClothingConfig> for AccessoryDraw {
    fn from(config: &ClothingConfig) -> Self {
        match config.accessory_draw {
            AccessoryDrawMode::Random => AccessoryDraw::Random,
            AccessoryDrawMode::Seeded => AccessoryDraw::Seeded(config.accessory_seed),
            AccessoryDrawMode::TopN => AccessoryDraw::TopN,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClothingEngine {
    draw: AccessoryDraw,
    basic_accessory_count: usize,
}

impl Default for ClothingEngine {
    fn default() -> Self {
        Self::new(AccessoryDraw::Random, 3)
    }
}

impl ClothingEngine {
    #[must_use]
    pub fn new(draw: AccessoryDraw, basic_accessory_count: usize) -> Self {
        Self {
            draw,
            basic_accessory_count,
        }
    }

    #[must_use]
    pub fn from_config(config: &ClothingConfig) -> Self {
        Self::new(AccessoryDraw::from(config), config.basic_accessory_count)
    }

    /// Build the ordered recommendation list for one validated input
    #[must_use]
    pub fn recommend(&self, input: &WeatherInput) -> Vec<ClothingItem> {
        let mut items = banded_items(input.temperature);
        let banded: HashSet<ClothingCategory> = items.iter().map(|i| i.category).collect();

        let base = catalog::base_items(input.condition, input.age_group);
        if base.is_empty() {
            warn!(
                condition = %input.condition,
                age_group = %input.age_group,
                "No base clothing defined for condition and age group"
            );
        }
        items.extend(
            base.iter()
                .filter(|t| !banded.contains(&t.category))
                .map(instantiate),
        );

        items.extend(
            catalog::themed_accessories(input.condition, input.age_group)
                .iter()
                .map(|a| instantiate(&a.as_item())),
        );
        items.extend(self.draw_basic_accessories(input.age_group));
        items.extend(extreme_temperature_items(input.temperature));

        apply_humidity(&mut items, input.humidity);

        for (index, item) in items.iter_mut().enumerate() {
            item.id = u32::try_from(index + 1).unwrap_or(u32::MAX);
        }

        let band = bands::band_for(input.temperature);
        debug!(
            temperature = input.temperature,
            band = band.name,
            framing = ?band.framing,
            count = items.len(),
            "Built clothing recommendations"
        );
        items
    }

    fn draw_basic_accessories(&self, age_group: AgeGroup) -> Vec<ClothingItem> {
        let pool = catalog::basic_accessories(age_group);
        let count = self.basic_accessory_count.min(pool.len());

        let picked: Vec<&AccessoryTemplate> = match self.draw {
            AccessoryDraw::TopN => pool.iter().take(count).collect(),
            AccessoryDraw::Seeded(seed) => pool
                .sample(&mut StdRng::seed_from_u64(seed), count)
                .collect(),
            AccessoryDraw::Random => pool.sample(&mut rand::rng(), count).collect(),
        };

        picked
            .into_iter()
            .map(|accessory| instantiate(&accessory.as_item()))
            .collect()
    }
}

fn instantiate(template: &ItemTemplate) -> ClothingItem {
    ClothingItem {
        id: 0,
        category: template.category,
        item: template.item.to_string(),
        description: template.description.to_string(),
        reason: template.reason.to_string(),
    }
}

fn banded_items(temperature: f64) -> Vec<ClothingItem> {
    let band = bands::band_for(temperature);
    let mut items: Vec<ClothingItem> = band.items.iter().map(instantiate).collect();

    if let Some(first) = items.first_mut() {
        let lead = band
            .lead_reason
            .replace(TEMPERATURE_PLACEHOLDER, &temperature.to_string());
        let rest = std::mem::take(&mut first.reason);
        first.reason = lead;
        if !rest.is_empty() {
            first.extend_reason(&rest);
        }
    }
    items
}

fn extreme_temperature_items(temperature: f64) -> Vec<ClothingItem> {
    let templates: &[ItemTemplate] = if temperature > HEAT_SAFETY_THRESHOLD {
        catalog::HEAT_SAFETY_ITEMS
    } else if temperature < COLD_SAFETY_THRESHOLD {
        catalog::COLD_SAFETY_ITEMS
    } else {
        &[]
    };
    templates.iter().map(instantiate).collect()
}

fn apply_humidity(items: &mut [ClothingItem], humidity: u8) {
    match humidity {
        h if h > 85 => {
            for item in items.iter_mut().filter(|i| i.category.is_garment()) {
                item.extend_description(
                    "High-performance quick-dry fabric (polyester) strongly recommended.",
                );
                item.extend_reason(&format!(
                    "Humidity {h}% is very high, so dealing with sweat is urgent."
                ));
            }
        }
        h if h > 70 => {
            for item in items.iter_mut().filter(|i| i.category.is_garment()) {
                item.extend_description("Moisture-wicking quick-dry fabric recommended.");
                item.extend_reason(&format!(
                    "Humidity {h}% is on the high side, so handling sweat matters."
                ));
            }
        }
        h if h < 30 => {
            for item in items
                .iter_mut()
                .filter(|i| i.category == ClothingCategory::Protection)
            {
                item.extend_description("Use moisturising cream for skin care as well.");
                item.extend_reason(&format!(
                    "Humidity {h}% is dry, so the skin needs protecting."
                ));
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Condition;
    use rstest::rstest;

    fn engine() -> ClothingEngine {
        ClothingEngine::new(AccessoryDraw::TopN, 3)
    }

    fn input(temperature: f64, humidity: u8, condition: Condition, age: AgeGroup) -> WeatherInput {
        WeatherInput::new(temperature, humidity, condition, age)
    }

    fn text(item: &ClothingItem) -> String {
        format!("{} {} {}", item.item, item.description, item.reason)
    }

    #[rstest]
    #[case(-50.0, 0)]
    #[case(-3.5, 29)]
    #[case(4.0, 30)]
    #[case(12.0, 55)]
    #[case(24.0, 70)]
    #[case(31.0, 71)]
    #[case(50.0, 100)]
    fn test_ids_are_unique_and_sequential(#[case] temperature: f64, #[case] humidity: u8) {
        for condition in Condition::ALL {
            for age in AgeGroup::ALL {
                let items = engine().recommend(&input(temperature, humidity, condition, age));
                assert!(!items.is_empty());
                let ids: Vec<u32> = items.iter().map(|i| i.id).collect();
                let expected: Vec<u32> = (1..=u32::try_from(items.len()).unwrap()).collect();
                assert_eq!(ids, expected);
            }
        }
    }

    #[test]
    fn test_banded_categories_replace_base_items() {
        // 30 °C band supplies tops and bottoms, base supplies the rest
        let items = engine().recommend(&input(30.0, 50, Condition::Sunny, AgeGroup::Toddler));
        let base_tops = items.iter().filter(|i| i.item == "UV-cut short-sleeve T-shirt").count();
        assert_eq!(base_tops, 0);
        assert!(items.iter().any(|i| i.item == "Velcro sandals"));
        assert!(items.iter().any(|i| i.item == "Wide-brimmed hat"));
        assert_eq!(items[0].item, "Thin mesh T-shirt");
    }

    #[test]
    fn test_first_banded_reason_cites_temperature() {
        let items = engine().recommend(&input(18.5, 50, Condition::Cloudy, AgeGroup::School));
        assert!(items[0].reason.starts_with("18.5°C"));
        let items = engine().recommend(&input(-7.0, 50, Condition::Snowy, AgeGroup::School));
        assert!(items[0].reason.starts_with("-7°C"));
    }

    #[test]
    fn test_very_high_humidity_annotates_every_garment() {
        let items = engine().recommend(&input(20.0, 90, Condition::Rainy, AgeGroup::Preschool));
        let garments: Vec<_> = items.iter().filter(|i| i.category.is_garment()).collect();
        assert!(!garments.is_empty());
        for item in garments {
            assert!(item.reason.contains("Humidity 90%"), "{}", item.item);
            assert!(item.description.contains("quick-dry"));
        }
        for item in items.iter().filter(|i| !i.category.is_garment()) {
            assert!(!item.reason.contains("Humidity"));
        }
    }

    #[test]
    fn test_high_humidity_uses_milder_wording() {
        let items = engine().recommend(&input(20.0, 80, Condition::Cloudy, AgeGroup::Toddler));
        for item in items.iter().filter(|i| i.category.is_garment()) {
            assert!(item.reason.contains("Humidity 80% is on the high side"));
        }
    }

    #[rstest]
    #[case(30)]
    #[case(50)]
    #[case(70)]
    fn test_moderate_humidity_adds_nothing(#[case] humidity: u8) {
        for condition in Condition::ALL {
            let items = engine().recommend(&input(15.0, humidity, condition, AgeGroup::School));
            assert!(items.iter().all(|i| !i.reason.contains("Humidity")));
        }
    }

    #[test]
    fn test_dry_air_annotates_protection_only() {
        let items = engine().recommend(&input(2.0, 20, Condition::Snowy, AgeGroup::Toddler));
        let protection: Vec<_> = items
            .iter()
            .filter(|i| i.category == ClothingCategory::Protection)
            .collect();
        assert!(!protection.is_empty());
        for item in protection {
            assert!(item.reason.contains("Humidity 20% is dry"));
        }
        for item in items.iter().filter(|i| i.category.is_garment()) {
            assert!(!item.reason.contains("Humidity"));
        }
    }

    #[test]
    fn test_heat_and_cold_framing_never_overlap() {
        let hot = engine().recommend(&input(35.0, 50, Condition::Sunny, AgeGroup::School));
        assert!(hot.iter().any(|i| i.reason.contains("heatstroke")));
        assert!(hot.iter().all(|i| !i.reason.contains("hypothermia")));

        let cold = engine().recommend(&input(2.0, 50, Condition::Snowy, AgeGroup::School));
        assert!(cold.iter().any(|i| i.reason.contains("hypothermia")));
        assert!(cold.iter().all(|i| !i.reason.contains("heatstroke")));
    }

    #[test]
    fn test_very_cold_day_is_not_framed_as_hypothermia() {
        let items = engine().recommend(&input(9.0, 50, Condition::Cloudy, AgeGroup::School));
        assert!(items[0].reason.starts_with("9°C is very cold"));
        assert!(items.iter().all(|i| !i.reason.contains("hypothermia")));
    }

    #[rstest]
    #[case(30.0, false, false)]
    #[case(30.5, true, false)]
    #[case(5.0, false, false)]
    #[case(4.5, false, true)]
    fn test_extreme_safety_items(#[case] temperature: f64, #[case] heat: bool, #[case] cold: bool) {
        let items = engine().recommend(&input(temperature, 50, Condition::Cloudy, AgeGroup::Preschool));
        assert_eq!(items.iter().any(|i| i.item == "Ice pack pouch"), heat);
        assert_eq!(items.iter().any(|i| i.item == "Windproof mask"), cold);
    }

    #[test]
    fn test_accessory_counts() {
        let items = engine().recommend(&input(15.0, 50, Condition::Cloudy, AgeGroup::Toddler));
        let accessories = items
            .iter()
            .filter(|i| i.category == ClothingCategory::Accessories)
            .count();
        // base cardigan + 5 themed + 3 basic
        assert_eq!(accessories, 9);
    }

    #[test]
    fn test_top_n_takes_pool_prefix() {
        let items = engine().recommend(&input(15.0, 50, Condition::Sunny, AgeGroup::School));
        let names: Vec<&str> = items.iter().map(|i| i.item.as_str()).collect();
        assert!(names.contains(&"School bag cover"));
        assert!(names.contains(&"Clip-on pocket"));
        assert!(names.contains(&"Study planner"));
        assert!(!names.contains(&"Personal safety alarm"));
    }

    #[test]
    fn test_draw_never_exceeds_pool() {
        let pool_len = catalog::basic_accessories(AgeGroup::School).len();
        let engine = ClothingEngine::new(AccessoryDraw::Seeded(1), pool_len + 3);
        let pool: HashSet<&str> = catalog::basic_accessories(AgeGroup::School)
            .iter()
            .map(|a| a.item)
            .collect();
        let items = engine.recommend(&input(15.0, 50, Condition::Cloudy, AgeGroup::School));
        let drawn: HashSet<&str> = items
            .iter()
            .map(|i| i.item.as_str())
            .filter(|name| pool.contains(name))
            .collect();
        assert_eq!(drawn, pool);
    }

    #[test]
    fn test_seeded_draw_is_deterministic() {
        let engine = ClothingEngine::new(AccessoryDraw::Seeded(7), 3);
        let request = input(15.0, 50, Condition::Rainy, AgeGroup::Preschool);
        assert_eq!(engine.recommend(&request), engine.recommend(&request));
    }

    #[test]
    fn test_random_draw_is_bounded_and_distinct() {
        let engine = ClothingEngine::new(AccessoryDraw::Random, 3);
        let pool: HashSet<&str> = catalog::basic_accessories(AgeGroup::Toddler)
            .iter()
            .map(|a| a.item)
            .collect();
        for _ in 0..20 {
            let items = engine.recommend(&input(15.0, 50, Condition::Cloudy, AgeGroup::Toddler));
            let drawn: Vec<&str> = items
                .iter()
                .map(|i| i.item.as_str())
                .filter(|name| pool.contains(name))
                .collect();
            let unique: HashSet<&str> = drawn.iter().copied().collect();
            assert_eq!(drawn.len(), 3);
            assert_eq!(unique.len(), 3);
        }
    }

    #[test]
    fn test_scenario_warm_sunny_toddler() {
        let items = engine().recommend(&input(30.0, 50, Condition::Sunny, AgeGroup::Toddler));
        for category in [
            ClothingCategory::Tops,
            ClothingCategory::Bottoms,
            ClothingCategory::Shoes,
        ] {
            assert!(items.iter().any(|i| i.category == category), "{category}");
        }
        assert!(
            items
                .iter()
                .any(|i| i.category == ClothingCategory::Protection && text(i).contains("UV"))
        );
    }

    #[test]
    fn test_scenario_freezing_snowy_school() {
        let items = engine().recommend(&input(2.0, 40, Condition::Snowy, AgeGroup::School));
        for category in [ClothingCategory::Tops, ClothingCategory::Bottoms] {
            let matching: Vec<_> = items.iter().filter(|i| i.category == category).collect();
            assert!(matching.iter().any(|i| text(i).contains("insulation")), "{category}");
            assert!(matching.iter().any(|i| i.reason.contains("hypothermia")), "{category}");
        }
        for item in &items {
            let lower = text(item).to_lowercase();
            assert!(!lower.contains("sun"), "{}", item.item);
            assert!(!text(item).contains("UV"), "{}", item.item);
        }
    }
}
