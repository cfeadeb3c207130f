use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Treats an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ingredient {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub unit: String,  // "g", "adet", "çay kaşığı" ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_prices: Option<Vec<StorePrice>>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            ..Default::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Kullanıcının beslenme tercihleri. Eksik alanlar `false` / boş kabul edilir.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietaryPreferences {
    #[serde(deserialize_with = "null_as_default")]
    pub is_vegan: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_vegetarian: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_gluten_free: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_lactose_free: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub allergies: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub cuisine_preferences: Vec<String>,  // sadece chat prompt'u için
    #[serde(deserialize_with = "null_as_default")]
    pub favorite_ingredients: Vec<String>, // sadece chat prompt'u için
}

impl DietaryPreferences {
    /// True when no axis is enabled and no allergy is listed.
    pub fn is_unrestricted(&self) -> bool {
        !self.is_vegan
            && !self.is_vegetarian
            && !self.is_gluten_free
            && !self.is_lactose_free
            && self.allergies.iter().all(|a| a.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitabilityVerdict {
    pub suitable: bool,
    pub reasons: Vec<String>,
    pub alternatives: BTreeMap<String, String>,  // malzeme adı -> önerilen alternatif
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostComparison {
    pub restaurant: f64,
    pub homemade: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<f64>,
}

impl CostComparison {
    pub fn savings(&self) -> f64 {
        self.savings.unwrap_or(self.restaurant - self.homemade)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Kolay,
    Orta,
    Zor,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Difficulty::Kolay => "Kolay",
            Difficulty::Orta => "Orta",
            Difficulty::Zor => "Zor",
        };
        write!(f, "{}", s)
    }
}

impl Difficulty {
    pub fn from_string(s: &str) -> Option<Self> {
        // İ -> i before lowercase, otherwise "İ".to_lowercase() keeps a combining dot
        let normalized = s.trim().replace('İ', "i").to_lowercase();

        match normalized.as_str() {
            "kolay" | "easy" => Some(Difficulty::Kolay),
            "orta" | "medium" => Some(Difficulty::Orta),
            "zor" | "hard" => Some(Difficulty::Zor),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarRecipe {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecognitionResponse {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub nutritional_info: NutritionalInfo,
    #[serde(default)]
    pub cost_comparison: CostComparison,
    #[serde(default)]
    pub preparation_time: u32,  // dakika
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub similar_recipes: Vec<SimilarRecipe>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorePrice {
    pub store: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientPrices {
    pub ingredient: String,
    pub prices: Vec<StorePrice>,
}

impl IngredientPrices {
    pub fn cheapest(&self) -> Option<&StorePrice> {
        self.prices
            .iter()
            .min_by(|a, b| a.price.total_cmp(&b.price))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub text: String,
    pub is_user: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_recipe: Option<SimilarRecipe>,
}
