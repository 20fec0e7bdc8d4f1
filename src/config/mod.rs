mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::{debug, warn};

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let mut config = load_from(&config_path).await?;

    // Environment variables override file credentials
    if let Ok(key) = env::var("GEMINI_API_KEY") {
        config.llm.api_key = key;
    }
    if let Ok(key) = env::var("VISION_API_KEY") {
        config.vision.api_key = key;
    }

    Ok(config)
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    // A missing file is not fatal: an absent model key must surface as a
    // submission-time warning, not a startup failure.
    match tokio::fs::read_to_string(config_path).await {
        Ok(config_str) => Ok(serde_yaml::from_str(&config_str)?),
        Err(e) => {
            warn!(
                "Configuration file '{}' not readable ({}), using defaults",
                config_path, e
            );
            Ok(Config::default())
        }
    }
}
