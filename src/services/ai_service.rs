use anyhow::Result;

use crate::models::{ChatMessage, ChatReply, DietaryPreferences, FoodRecognitionResponse, IngredientPrices};

/// Trait for food recognition backends (DeepSeek, demo data, test doubles)
#[async_trait::async_trait]
pub trait RecognitionService: Send + Sync {
    async fn analyze_food_image(
        &self,
        image_path: &str,
        preferences: &DietaryPreferences,
    ) -> Result<FoodRecognitionResponse>;

    async fn get_market_prices(&self, ingredients: &[String]) -> Result<Vec<IngredientPrices>>;

    async fn send_chat_message(
        &self,
        message: &str,
        history: &[ChatMessage],
        preferences: &DietaryPreferences,
    ) -> Result<ChatReply>;
}
