use crate::infrastructure::openai::{CompletionOptions, DEFAULT_API_BASE};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OPENAI_API_BASE is not a valid URL: {0}")]
    InvalidApiBase(String),

    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Settings for the completion provider, read once at startup.
#[derive(Debug, Clone)]
pub struct AdCopyConfig {
    pub api_key: Option<String>,
    pub api_base: Url,
    pub completion: CompletionOptions,
}

impl AdCopyConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("OPENAI_API_KEY").filter(|key| !key.trim().is_empty());

        let api_base = lookup("OPENAI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base =
            Url::parse(&api_base).map_err(|e| ConfigError::InvalidApiBase(e.to_string()))?;

        let completion = CompletionOptions {
            temperature: parse_optional(&lookup, "OPENAI_TEMPERATURE")?,
            max_tokens: parse_optional(&lookup, "OPENAI_MAX_TOKENS")?,
        };

        Ok(Self {
            api_key,
            api_base,
            completion,
        })
    }

    /// A config without a credential, pointed at the default provider.
    pub fn without_api_key() -> Self {
        Self {
            api_key: None,
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            completion: CompletionOptions::default(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_base(mut self, api_base: Url) -> Self {
        self.api_base = api_base;
        self
    }
}

fn parse_optional<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        _ => Ok(None),
    }
}
