use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;

use crate::handlers::{RecipeAnalysis, RecipeHandler};
use crate::models::{ChatMessage, ChatReply, DietaryPreferences, Ingredient, IngredientPrices, SuitabilityVerdict};

/// Request payloads sent by the mobile app
#[derive(Debug, Deserialize)]
pub struct SuitabilityRequest {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub preferences: DietaryPreferences,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub image_path: String,
    #[serde(default)]
    pub preferences: DietaryPreferences,
}

#[derive(Debug, Deserialize)]
pub struct MarketPriceRequest {
    pub ingredients: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    #[serde(default)]
    pub preferences: DietaryPreferences,
}

pub struct AppState {
    pub recipe_handler: Arc<RecipeHandler>,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

pub fn create_router(recipe_handler: Arc<RecipeHandler>) -> Router {
    let state = Arc::new(AppState { recipe_handler });

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/api/suitability", post(suitability_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/market-prices", post(market_prices_handler))
        .route("/api/chat", post(chat_handler))
        .with_state(state)
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, (StatusCode, String)> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("❌ Failed to parse request payload: {}", e);
        log::debug!("📦 Raw payload: {}", body.chars().take(500).collect::<String>());
        (StatusCode::UNPROCESSABLE_ENTITY, format!("Invalid request: {}", e))
    })
}

fn upstream_error(e: anyhow::Error) -> (StatusCode, String) {
    log::error!("❌ Recognition service error: {}", e);
    (StatusCode::BAD_GATEWAY, "Recognition service unavailable".to_string())
}

async fn suitability_handler(
    State(state): State<Arc<AppState>>,
    body: String,
) -> ApiResult<SuitabilityVerdict> {
    let request: SuitabilityRequest = parse_body(&body)?;
    Ok(Json(state.recipe_handler.check(&request.ingredients, &request.preferences)))
}

async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    body: String,
) -> ApiResult<RecipeAnalysis> {
    let request: AnalyzeRequest = parse_body(&body)?;

    state
        .recipe_handler
        .analyze(&request.image_path, &request.preferences)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn market_prices_handler(
    State(state): State<Arc<AppState>>,
    body: String,
) -> ApiResult<Vec<IngredientPrices>> {
    let request: MarketPriceRequest = parse_body(&body)?;

    state
        .recipe_handler
        .market_prices(&request.ingredients)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn chat_handler(
    State(state): State<Arc<AppState>>,
    body: String,
) -> ApiResult<ChatReply> {
    let request: ChatRequest = parse_body(&body)?;

    state
        .recipe_handler
        .chat(&request.message, &request.history, &request.preferences)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn root_handler() -> &'static str {
    "Yummai Diet Service - POST /api/suitability, /api/analyze, /api/market-prices, /api/chat"
}

async fn health_check() -> &'static str {
    "OK"
}
