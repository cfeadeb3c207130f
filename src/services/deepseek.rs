use anyhow::Result;
use base64::{engine::general_purpose, Engine};
use serde::{Deserialize, Serialize};
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::models::{
    ChatMessage, ChatReply, DietaryPreferences, FoodRecognitionResponse, IngredientPrices,
    SimilarRecipe,
};
use crate::services::ai_service::RecognitionService;
use crate::services::mock_data;

pub const DEFAULT_API_URL: &str = "https://api.deepseek.ai/v1";
pub const DEFAULT_MODEL: &str = "deepseek-chat";

#[derive(Debug, Serialize)]
struct ChatTurn {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatTurn>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Debug, Deserialize)]
struct MessageContent {
    content: String,
}

#[derive(Debug, Serialize)]
struct MarketPriceRequest<'a> {
    ingredients: &'a [String],
}

#[derive(Debug, Deserialize)]
struct MarketPriceResponse {
    prices: Vec<IngredientPrices>,
}

pub struct DeepSeekService {
    api_key: Option<String>,
    api_url: String,
    model: String,
    client: reqwest::Client,
    demo_cursor: AtomicUsize,
}

impl DeepSeekService {
    pub fn new(api_key: Option<String>, api_url: String, model: String) -> Self {
        let api_key = api_key.filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            log::warn!("⚠️ DeepSeek API key is not configured, using demo data");
        }

        Self {
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            model,
            client: reqwest::Client::new(),
            demo_cursor: AtomicUsize::new(0),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn next_demo_dish(&self) -> FoodRecognitionResponse {
        let index = self.demo_cursor.fetch_add(1, Ordering::Relaxed);
        mock_data::demo_dish(index)
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("DeepSeek API key is not configured"))
    }

    async fn request_food_analysis(
        &self,
        image_path: &str,
        preferences: &DietaryPreferences,
    ) -> Result<FoodRecognitionResponse> {
        let api_key = self.api_key()?;

        let image_data = fs::read(image_path)?;
        let base64_image = general_purpose::STANDARD.encode(&image_data);

        log::debug!("📊 Image file size: {} bytes", image_data.len());
        log::debug!("🔄 Base64 encoded size: {} bytes", base64_image.len());

        let form = reqwest::multipart::Form::new()
            .text("image", base64_image)
            .text("preferences", serde_json::to_string(preferences)?);

        let response = self
            .client
            .post(format!("{}/vision/analyze-food", self.api_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .multipart(form)
            .send()
            .await?;

        log::debug!("📥 DeepSeek response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            log::error!("❌ DeepSeek API error response: {}", error_text);
            anyhow::bail!("DeepSeek API error ({}): {}", status, error_text);
        }

        let response_text = response.text().await?;
        let recipe: FoodRecognitionResponse = serde_json::from_str(&response_text)?;
        log::info!("✅ Recognized dish: {} ({} ingredients)", recipe.name, recipe.ingredients.len());

        Ok(recipe)
    }

    async fn request_market_prices(&self, ingredients: &[String]) -> Result<Vec<IngredientPrices>> {
        let api_key = self.api_key()?;

        let response = self
            .client
            .post(format!("{}/market/prices", self.api_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&MarketPriceRequest { ingredients })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            anyhow::bail!("DeepSeek market API error ({}): {}", status, error_text);
        }

        let data: MarketPriceResponse = response.json().await?;
        Ok(data.prices)
    }

    fn system_prompt(preferences: &DietaryPreferences) -> Result<String> {
        Ok(format!(
            "You are a helpful cooking assistant for the Yummai app. You help users with recipes, \
             cooking techniques, and food-related questions.\n\
             User preferences: {}.\n\
             Always provide helpful, accurate cooking advice. If you suggest a recipe, include it as structured data.",
            serde_json::to_string(preferences)?
        ))
    }

    fn build_chat_request(
        &self,
        message: &str,
        history: &[ChatMessage],
        preferences: &DietaryPreferences,
    ) -> Result<ChatRequest> {
        let mut messages = vec![ChatTurn {
            role: "system".to_string(),
            content: Self::system_prompt(preferences)?,
        }];

        messages.extend(history.iter().map(|msg| ChatTurn {
            role: (if msg.is_user { "user" } else { "assistant" }).to_string(),
            content: msg.text.clone(),
        }));

        messages.push(ChatTurn {
            role: "user".to_string(),
            content: message.to_string(),
        });

        Ok(ChatRequest {
            model: self.model.clone(),
            messages,
            temperature: 0.7,
            max_tokens: 500,
        })
    }

    fn parse_chat_reply(content: &str) -> ChatReply {
        let lower = content.to_lowercase();
        let related_recipe = if lower.contains("recipe") || lower.contains("tarif") {
            Some(SimilarRecipe {
                id: "101".to_string(),
                name: "Suggested Recipe".to_string(),
            })
        } else {
            None
        };

        ChatReply {
            text: content.to_string(),
            related_recipe,
        }
    }
}

#[async_trait::async_trait]
impl RecognitionService for DeepSeekService {
    async fn analyze_food_image(
        &self,
        image_path: &str,
        preferences: &DietaryPreferences,
    ) -> Result<FoodRecognitionResponse> {
        log::debug!("📸 Starting image analysis for: {}", image_path);

        if !self.has_api_key() {
            return Ok(self.next_demo_dish());
        }

        match self.request_food_analysis(image_path, preferences).await {
            Ok(recipe) => Ok(recipe),
            Err(e) => {
                log::warn!("⚠️ Food analysis failed, falling back to demo data: {}", e);
                Ok(self.next_demo_dish())
            }
        }
    }

    async fn get_market_prices(&self, ingredients: &[String]) -> Result<Vec<IngredientPrices>> {
        if !self.has_api_key() {
            return Ok(mock_data::demo_prices(ingredients));
        }

        match self.request_market_prices(ingredients).await {
            Ok(prices) => Ok(prices),
            Err(e) => {
                log::warn!("⚠️ Market price lookup failed, using demo prices: {}", e);
                Ok(mock_data::demo_prices(ingredients))
            }
        }
    }

    async fn send_chat_message(
        &self,
        message: &str,
        history: &[ChatMessage],
        preferences: &DietaryPreferences,
    ) -> Result<ChatReply> {
        let api_key = self.api_key()?;
        let request = self.build_chat_request(message, history, preferences)?;

        log::info!("🤖 Sending chat request to DeepSeek with model: {}", self.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        log::info!("📥 DeepSeek response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await?;
            log::error!("❌ DeepSeek API error ({}): {}", status, error_text);
            anyhow::bail!("DeepSeek API error ({}): {}", status, error_text);
        }

        let chat_response: ChatResponse = response.json().await?;
        let content = chat_response
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| anyhow::anyhow!("DeepSeek returned no choices"))?;

        Ok(Self::parse_chat_reply(content))
    }
}
