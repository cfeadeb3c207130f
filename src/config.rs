use std::env;

use crate::services::deepseek::{DEFAULT_API_URL, DEFAULT_MODEL};

pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub deepseek_api_key: Option<String>,
    pub deepseek_api_url: String,
    pub deepseek_model: String,
    pub server_addr: String,
}

impl AppConfig {
    /// Reads the configuration from the environment (call `dotenv()` first).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            deepseek_api_key: lookup("DEEPSEEK_API_KEY").filter(|key| !key.trim().is_empty()),
            deepseek_api_url: lookup("DEEPSEEK_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            deepseek_model: lookup("DEEPSEEK_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            server_addr: lookup("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);

        assert_eq!(config.deepseek_api_key, None);
        assert_eq!(config.deepseek_api_url, "https://api.deepseek.ai/v1");
        assert_eq!(config.deepseek_model, "deepseek-chat");
        assert_eq!(config.server_addr, "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides_and_blank_key() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("DEEPSEEK_API_KEY", ""),
            ("DEEPSEEK_API_URL", "http://localhost:9000/v1"),
            ("SERVER_ADDR", "127.0.0.1:3000"),
        ]);

        let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.deepseek_api_key, None);
        assert_eq!(config.deepseek_api_url, "http://localhost:9000/v1");
        assert_eq!(config.server_addr, "127.0.0.1:3000");
    }
}
