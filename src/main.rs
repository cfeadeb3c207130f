use anyhow::Result;
use dotenv::dotenv;
use std::sync::Arc;

use yummai_diet::config::AppConfig;
use yummai_diet::services::DeepSeekService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Load environment variables
    dotenv().ok();

    log::info!("🚀 Starting Yummai Diet Service...");

    let config = AppConfig::from_env();

    let deepseek = Arc::new(DeepSeekService::new(
        config.deepseek_api_key.clone(),
        config.deepseek_api_url.clone(),
        config.deepseek_model.clone(),
    ));
    if deepseek.has_api_key() {
        log::info!("✅ DeepSeek service initialized with model: {}", config.deepseek_model);
    } else {
        log::info!("✅ DeepSeek service initialized in demo mode");
    }

    #[cfg(feature = "http-server")]
    {
        use yummai_diet::handlers::RecipeHandler;
        use yummai_diet::server::create_router;
        use yummai_diet::services::RecognitionService;

        let recipe_handler = Arc::new(RecipeHandler::new(deepseek as Arc<dyn RecognitionService>));
        log::info!("✅ Recipe handler initialized");

        let app = create_router(recipe_handler);
        let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;

        log::info!("🌐 HTTP server starting on {}", config.server_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                log::error!("❌ HTTP server stopped: {}", e);
            }
        });

        log::info!("✅ HTTP server started");
    }

    #[cfg(not(feature = "http-server"))]
    log::warn!("⚠️ Built without the http-server feature, nothing to serve");

    log::info!("🎉 Service is ready!");

    println!("\n🍽️ Yummai Diet Service çalışıyor!");
    #[cfg(feature = "http-server")]
    println!("🌐 API: http://{}", config.server_addr);
    println!("   POST /api/suitability  - Tarif uygunluk kontrolü");
    println!("   POST /api/analyze      - Yemek fotoğrafı analizi");
    println!("   POST /api/market-prices - Market fiyatları");
    println!("   POST /api/chat         - Mutfak asistanı");
    println!("\n🛑 Durdurmak için Ctrl+C basın\n");

    tokio::signal::ctrl_c().await?;

    log::info!("🛑 Shutting down...");

    Ok(())
}
