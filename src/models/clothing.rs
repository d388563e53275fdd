//! Clothing recommendation items

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingCategory {
    Tops,
    Bottoms,
    Shoes,
    Protection,
    Accessories,
}

impl ClothingCategory {
    pub const ALL: [ClothingCategory; 5] = [
        ClothingCategory::Tops,
        ClothingCategory::Bottoms,
        ClothingCategory::Shoes,
        ClothingCategory::Protection,
        ClothingCategory::Accessories,
    ];

    /// Garments worn on the body, the ones affected by sweat and humidity
    #[must_use]
    pub fn is_garment(self) -> bool {
        matches!(self, ClothingCategory::Tops | ClothingCategory::Bottoms)
    }
}

impl fmt::Display for ClothingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClothingCategory::Tops => "tops",
            ClothingCategory::Bottoms => "bottoms",
            ClothingCategory::Shoes => "shoes",
            ClothingCategory::Protection => "protection",
            ClothingCategory::Accessories => "accessories",
        };
        f.write_str(name)
    }
}

/// A single recommended item, built fresh for every response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    /// Unique within one response, assigned sequentially from 1
    pub id: u32,
    pub category: ClothingCategory,
    pub item: String,
    pub description: String,
    pub reason: String,
}

impl ClothingItem {
    /// Append a sentence to the description
    pub fn extend_description(&mut self, text: &str) {
        append_sentence(&mut self.description, text);
    }

    /// Append a sentence to the rationale
    pub fn extend_reason(&mut self, text: &str) {
        append_sentence(&mut self.reason, text);
    }
}

fn append_sentence(target: &mut String, text: &str) {
    if !target.is_empty() && !target.ends_with(' ') {
        target.push(' ');
    }
    target.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_reason_separates_sentences() {
        let mut item = ClothingItem {
            id: 1,
            category: ClothingCategory::Tops,
            item: "Long-sleeve T-shirt".to_string(),
            description: "Basic warmth.".to_string(),
            reason: "Keeps body heat steady.".to_string(),
        };
        item.extend_reason("Humidity 90% is very high.");
        item.extend_description("Quick-dry fabric strongly recommended.");
        assert_eq!(item.reason, "Keeps body heat steady. Humidity 90% is very high.");
        assert_eq!(
            item.description,
            "Basic warmth. Quick-dry fabric strongly recommended."
        );
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&ClothingCategory::Protection).unwrap();
        assert_eq!(json, "\"protection\"");
        assert!(ClothingCategory::Bottoms.is_garment());
        assert!(!ClothingCategory::Shoes.is_garment());
    }
}
