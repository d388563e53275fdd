//! Temperature bands and their supplementary clothing sets
//!
//! Bands are half-open: a band owns every temperature strictly above its
//! threshold up to and including the threshold of the band above it. The
//! bands are scanned warmest first and the first match wins, so every
//! temperature lands in exactly one band.

use super::catalog::ItemTemplate;
use crate::models::ClothingCategory::{Accessories, Bottoms, Protection, Tops};

/// Safety framing carried by a band's rationale text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskFraming {
    /// Heatstroke warnings
    Heat,
    Neutral,
    /// Hypothermia warnings
    Cold,
}

#[derive(Debug)]
pub struct TemperatureBand {
    pub name: &'static str,
    /// Exclusive lower bound; `None` for the coldest band
    pub above: Option<f64>,
    pub framing: RiskFraming,
    /// Opening rationale, `{temp}` is replaced by the input temperature
    pub lead_reason: &'static str,
    pub items: &'static [ItemTemplate],
}

const fn item(
    category: crate::models::ClothingCategory,
    item: &'static str,
    description: &'static str,
    reason: &'static str,
) -> ItemTemplate {
    ItemTemplate {
        category,
        item,
        description,
        reason,
    }
}

pub const TEMPERATURE_PLACEHOLDER: &str = "{temp}";

pub static BANDS: &[TemperatureBand] = &[
    TemperatureBand {
        name: "dangerous heat",
        above: Some(32.0),
        framing: RiskFraming::Heat,
        lead_reason: "{temp}°C is dangerous heat with a serious heatstroke risk. Children cannot yet regulate body heat well, so act immediately.",
        items: &[
            item(Tops, "Cool-touch tank top", "Contact-cooling fabric that lowers body heat. UV-cut is a must. Minimises the child's heatstroke risk.", ""),
            item(Bottoms, "Ultra-thin shorts", "The thinnest fabric with maximum airflow. Stay in the shade.", "Heatstroke risk is high, so prefer indoor play."),
            item(Protection, "Cooling vest", "Pockets for ice packs that actively cool the body.", "Helps a child's body shed heat and avoid heatstroke."),
        ],
    },
    TemperatureBand {
        name: "extreme heat",
        above: Some(28.0),
        framing: RiskFraming::Heat,
        lead_reason: "{temp}°C is extreme heat. Children heat up faster than adults, so watch closely for heatstroke.",
        items: &[
            item(Tops, "Thin mesh T-shirt", "Excellent airflow that dries sweat quickly, made for children who sweat a lot.", ""),
            item(Tops, "UV-cut short-sleeve shirt", "Blocks more than 95% of UV and protects sensitive skin.", "Shields a child's skin from strong sunlight."),
            item(Bottoms, "Cool-touch shorts", "Contact-cooling and easy to move in, cut to protect the knees from scrapes.", "Keeps legs comfortable and lowers heatstroke risk."),
        ],
    },
    TemperatureBand {
        name: "summer day",
        above: Some(25.0),
        framing: RiskFraming::Neutral,
        lead_reason: "{temp}°C is hot but fine for activity. Supports lively play.",
        items: &[
            item(Tops, "Short-sleeve T-shirt", "Thin cotton that is kind to the skin and breathes well. Keeps up with active children.", ""),
            item(Tops, "Short-sleeve polo shirt", "The collar protects the neck from the sun and quick-dry fabric handles sweat.", "Sweat care and sunburn prevention for active children."),
            item(Bottoms, "Thin half pants", "Above the knee for cool legs, in a length that still guards against scrapes.", "Safety and comfort together."),
        ],
    },
    TemperatureBand {
        name: "comfortably warm",
        above: Some(22.0),
        framing: RiskFraming::Neutral,
        lead_reason: "{temp}°C is comfortable, but children still need help regulating body heat.",
        items: &[
            item(Tops, "Thin long-sleeve shirt", "Copes with morning and evening swings. Long sleeves steady a child's immature temperature control.", ""),
            item(Tops, "Short sleeves with thin cardigan", "Reacts quickly to temperature changes and is easy for children to take off.", "Builds independence while supporting temperature control."),
            item(Bottoms, "Cropped pants", "A moderate length that protects the knees and suits active play.", "Fewer play injuries and more comfort."),
        ],
    },
    TemperatureBand {
        name: "pleasant",
        above: Some(19.0),
        framing: RiskFraming::Neutral,
        lead_reason: "{temp}°C is pleasant, yet a child's body warmth still needs attention.",
        items: &[
            item(Tops, "Long-sleeve T-shirt", "Basic warmth that keeps a child's core temperature stable.", ""),
            item(Tops, "Thin sweater", "Moderate warmth that is easy to adjust if play gets sweaty.", "Matches warmth to activity level."),
            item(Protection, "Thin jacket", "A windbreaker, since children feel the wind more.", "Helps prevent colds."),
        ],
    },
    TemperatureBand {
        name: "cool",
        above: Some(16.0),
        framing: RiskFraming::Neutral,
        lead_reason: "{temp}°C is cool, and children feel the cold more than adults.",
        items: &[
            item(Tops, "Medium-weight sweater", "Solid warmth that stops body heat dropping.", ""),
            item(Tops, "Long sleeves with vest", "Layers that adjust easily and that children can manage alone.", "Layering matched to a child's temperature control."),
            item(Protection, "Light blouson", "Blocks wind and holds warmth. Important for avoiding colds.", "Supports the immune system."),
        ],
    },
    TemperatureBand {
        name: "chilly",
        above: Some(13.0),
        framing: RiskFraming::Neutral,
        lead_reason: "{temp}°C is chilly and a child's body heat can drop.",
        items: &[
            item(Tops, "Thick sweater", "Wool blend that holds warmth well.", ""),
            item(Tops, "Fleece", "Light and warm, easy to move in and simple to wash.", "Activity and warmth together."),
            item(Tops, "Thick hoodie", "The hood keeps the head warm and stops the neck getting cold.", "Neck and head warmth matter."),
            item(Protection, "Medium-weight jacket", "Blocks wind and cold. Essential to keep body heat.", "Prevents colds and feeling unwell."),
        ],
    },
    TemperatureBand {
        name: "cold",
        above: Some(10.0),
        framing: RiskFraming::Neutral,
        lead_reason: "{temp}°C is cold, so managing a child's body heat is important.",
        items: &[
            item(Tops, "Thick knit with cardigan", "Two warm layers that reliably hold body heat.", ""),
            item(Tops, "Fleece-lined hoodie", "Brushed lining keeps children warm and comfortable.", "Raises how warm the child feels."),
            item(Bottoms, "Thick long pants", "Fleece lining keeps the legs properly warm.", "Stops legs getting cold."),
            item(Protection, "Blouson", "Shuts out the wind completely and stops body heat dropping.", "Stronger protection from the cold."),
            item(Protection, "Light down jacket", "Light yet very warm, without restricting movement.", "Warmth without losing mobility."),
        ],
    },
    TemperatureBand {
        name: "very cold",
        above: Some(7.0),
        framing: RiskFraming::Neutral,
        lead_reason: "{temp}°C is very cold and keeping a child warm takes effort. Layer up and check their hands and feet often.",
        items: &[
            item(Tops, "Thermal inner with thick knit", "A heat-generating inner raises base body warmth from the inside.", ""),
            item(Tops, "Thick fleece with vest", "Double insulation around the torso keeps the core warm.", "A warm core keeps the whole body comfortable."),
            item(Bottoms, "Winter pants with leggings", "Two layers fully insulate the legs against the cold.", "Complete lower-body insulation."),
            item(Protection, "Thick coat", "Keeps out wind and snow, sealing body heat in.", "Keeping body heat is the top priority."),
            item(Protection, "Medium-weight down jacket", "High insulation that keeps a child warm while staying easy to move in.", "Comfort and warmth together."),
        ],
    },
    TemperatureBand {
        name: "severe cold",
        above: Some(4.0),
        framing: RiskFraming::Cold,
        lead_reason: "{temp}°C is severe cold with a real risk of hypothermia for children.",
        items: &[
            item(Tops, "Three-layer set: thermal, thick knit, down vest", "Three layers give the strongest insulation and reliably hold body heat.", ""),
            item(Tops, "Fleece inner with thick sweater", "A brushed inner warms from the skin outward.", "Warms the child from the inside."),
            item(Bottoms, "Tights with fleece-lined pants", "Two insulating layers protect the legs and hips from the cold.", "Prevents hypothermia starting from the legs."),
            item(Protection, "Winter coat", "Fully windproof and insulated, sealing the child off from the cold air.", "Protecting body heat is critical."),
            item(Accessories, "Winter hat and glove set", "Keeps the head and fingertips warm.", "Extremities lose heat first."),
        ],
    },
    TemperatureBand {
        name: "extreme cold",
        above: None,
        framing: RiskFraming::Cold,
        lead_reason: "{temp}°C is extreme cold, a temperature that threatens a child's life through hypothermia.",
        items: &[
            item(Tops, "Multi-layer top set", "Thermal inner, thick knit, down vest and sweater: maximum insulation against hypothermia.", ""),
            item(Bottoms, "Full winter pants set", "Tights, fleece-lined pants and insulated over-pants in three layers.", "Complete lower-body insulation is vital to prevent hypothermia."),
            item(Protection, "Thick down coat", "Maximum insulation that keeps body heat in. A hood is essential.", "Protecting the child's life comes first."),
            item(Protection, "Winter coat with blanket", "A blanket over the coat for complete protection and emergency warmth.", "Keeps children safe in extreme cold."),
            item(Accessories, "Full cold-weather set", "Winter hat, thick gloves, neck warmer and hand warmers together.", "Prevents frostbite and hypothermia."),
            item(Accessories, "Emergency warming kit", "Disposable warmers, a thermal blanket and warm drinks ready to go.", "A way to restore body heat in an emergency."),
        ],
    },
];

/// Band containing `temperature`
#[must_use]
pub fn band_for(temperature: f64) -> &'static TemperatureBand {
    BANDS
        .iter()
        .find(|band| band.above.is_none_or(|threshold| temperature > threshold))
        .unwrap_or(&BANDS[BANDS.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(45.0, "dangerous heat")]
    #[case(32.1, "dangerous heat")]
    #[case(32.0, "extreme heat")]
    #[case(30.0, "extreme heat")]
    #[case(28.0, "summer day")]
    #[case(25.0, "comfortably warm")]
    #[case(22.0, "pleasant")]
    #[case(19.0, "cool")]
    #[case(18.0, "cool")]
    #[case(16.0, "chilly")]
    #[case(13.0, "cold")]
    #[case(10.0, "very cold")]
    #[case(7.0, "severe cold")]
    #[case(4.1, "severe cold")]
    #[case(4.0, "extreme cold")]
    #[case(-50.0, "extreme cold")]
    fn test_band_boundaries(#[case] temperature: f64, #[case] expected: &str) {
        assert_eq!(band_for(temperature).name, expected);
    }

    #[test]
    fn test_bands_are_descending_and_end_open() {
        let thresholds: Vec<f64> = BANDS.iter().filter_map(|b| b.above).collect();
        assert_eq!(thresholds.len(), BANDS.len() - 1);
        assert!(thresholds.windows(2).all(|w| w[0] > w[1]));
        assert!(BANDS.last().is_some_and(|b| b.above.is_none()));
    }

    #[test]
    fn test_band_sizes_and_lead_reason() {
        for band in BANDS {
            assert!((3..=6).contains(&band.items.len()), "{}", band.name);
            assert!(band.lead_reason.contains(TEMPERATURE_PLACEHOLDER));
        }
    }

    #[test]
    fn test_framing_follows_temperature() {
        for band in BANDS {
            match band.framing {
                RiskFraming::Heat => assert!(band.above.is_some_and(|t| t >= 28.0)),
                RiskFraming::Cold => assert!(band.above.is_none_or(|t| t < 7.0)),
                RiskFraming::Neutral => {}
            }
        }
        assert_eq!(band_for(35.0).framing, RiskFraming::Heat);
        assert_eq!(band_for(2.0).framing, RiskFraming::Cold);
        assert_eq!(band_for(9.0).framing, RiskFraming::Neutral);
    }

    #[test]
    fn test_hypothermia_wording_only_in_cold_bands() {
        for band in BANDS {
            let mentions = band.lead_reason.contains("hypothermia")
                || band.items.iter().any(|i| i.reason.contains("hypothermia"));
            assert_eq!(mentions, band.framing == RiskFraming::Cold, "{}", band.name);
        }
    }
}
