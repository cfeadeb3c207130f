use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;

use crate::diet::{check_dietary_suitability, evaluate_recipe};
use crate::models::{
    ChatMessage, ChatReply, DietaryPreferences, FoodRecognitionResponse, Ingredient,
    IngredientPrices, SuitabilityVerdict,
};
use crate::services::RecognitionService;

#[derive(Debug, Clone, Serialize)]
pub struct RecipeAnalysis {
    pub recipe: FoodRecognitionResponse,
    pub verdict: SuitabilityVerdict,
}

pub struct RecipeHandler {
    recognizer: Arc<dyn RecognitionService>,
}

impl RecipeHandler {
    pub fn new(recognizer: Arc<dyn RecognitionService>) -> Self {
        Self { recognizer }
    }

    /// Recognize the dish in `image_path` and check it against the user's preferences.
    pub async fn analyze(
        &self,
        image_path: &str,
        preferences: &DietaryPreferences,
    ) -> Result<RecipeAnalysis> {
        log::info!("📸 Analyzing food image: {}", image_path);

        let recipe = self.recognizer.analyze_food_image(image_path, preferences).await?;
        let verdict = evaluate_recipe(&recipe, preferences);

        if verdict.suitable {
            log::info!("✅ {} is suitable for the user", recipe.name);
        } else {
            log::info!("⚠️ {} is not suitable: {} reasons", recipe.name, verdict.reasons.len());
        }

        Ok(RecipeAnalysis { recipe, verdict })
    }

    pub fn check(&self, ingredients: &[Ingredient], preferences: &DietaryPreferences) -> SuitabilityVerdict {
        check_dietary_suitability(ingredients, preferences)
    }

    pub async fn market_prices(&self, ingredients: &[String]) -> Result<Vec<IngredientPrices>> {
        log::info!("🛒 Looking up market prices for {} ingredients", ingredients.len());
        self.recognizer.get_market_prices(ingredients).await
    }

    pub async fn chat(
        &self,
        message: &str,
        history: &[ChatMessage],
        preferences: &DietaryPreferences,
    ) -> Result<ChatReply> {
        log::info!("💬 Chat message ({} previous turns): '{}'", history.len(), message);
        self.recognizer.send_chat_message(message, history, preferences).await
    }
}
