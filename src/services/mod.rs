pub mod ai_service;
pub mod deepseek; // DeepSeek vision/chat API
pub mod mock_data; // demo recipes and prices

pub use ai_service::RecognitionService;
pub use deepseek::DeepSeekService;
