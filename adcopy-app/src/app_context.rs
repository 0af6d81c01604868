use crate::application::GenerateAdCopy;
use crate::config::{AdCopyConfig, ConfigError};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub generate_ad_copy: Arc<GenerateAdCopy>,
}

impl AppContext {
    pub fn new(config: &AdCopyConfig) -> Self {
        Self {
            generate_ad_copy: Arc::new(GenerateAdCopy::new(config)),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let config = AdCopyConfig::from_env()?;

        match &config.api_key {
            Some(key) => tracing::info!("OpenAI API key loaded ({} characters)", key.len()),
            None => tracing::warn!("OPENAI_API_KEY is not set; generation requests will fail"),
        }
        tracing::info!("Using completion API at {}", config.api_base);

        Ok(Self::new(&config))
    }
}
