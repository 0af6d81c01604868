use super::Language;
use adcopy_errors::AppError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_AI_MODEL: &str = "gpt-3.5-turbo";

/// Model identifiers offered by the form UI, with their labels.
pub const AI_MODELS: &[(&str, &str)] = &[("gpt-3.5-turbo", "GPT-3.5 Turbo"), ("gpt-4", "GPT-4")];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    company_name: String,
    landing_url: String,
    product_type: String,
    language: Language,
    ai_model: String,
}

impl GenerationRequest {
    /// Fails with [`AppError::MissingFields`] when any required field is
    /// blank. The URL is not otherwise checked.
    pub fn new(
        company_name: impl Into<String>,
        landing_url: impl Into<String>,
        product_type: impl Into<String>,
    ) -> Result<Self, AppError> {
        let company_name = company_name.into().trim().to_string();
        let landing_url = landing_url.into().trim().to_string();
        let product_type = product_type.into().trim().to_string();

        if company_name.is_empty() || landing_url.is_empty() || product_type.is_empty() {
            return Err(AppError::MissingFields);
        }

        Ok(Self {
            company_name,
            landing_url,
            product_type,
            language: Language::default(),
            ai_model: DEFAULT_AI_MODEL.to_string(),
        })
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Codes outside the catalog fall back to English.
    pub fn with_language_code(self, code: &str) -> Self {
        self.with_language(Language::resolve(code))
    }

    /// A blank model identifier keeps the default.
    pub fn with_ai_model(mut self, ai_model: impl Into<String>) -> Self {
        let ai_model = ai_model.into();
        let ai_model = ai_model.trim();
        if !ai_model.is_empty() {
            self.ai_model = ai_model.to_string();
        }
        self
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn landing_url(&self) -> &str {
        &self.landing_url
    }

    pub fn product_type(&self) -> &str {
        &self.product_type
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn ai_model(&self) -> &str {
        &self.ai_model
    }
}

/// Unvalidated request fields as clients send them. The JSON API uses
/// camelCase names, HTML forms post the snake_case spellings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationInput {
    #[serde(alias = "company_name")]
    pub company_name: Option<String>,
    #[serde(alias = "landing_url")]
    pub landing_url: Option<String>,
    #[serde(alias = "product_type")]
    pub product_type: Option<String>,
    pub language: Option<String>,
    #[serde(alias = "ai_model")]
    pub ai_model: Option<String>,
}

impl GenerationInput {
    pub fn into_request(self) -> Result<GenerationRequest, AppError> {
        let mut request = GenerationRequest::new(
            self.company_name.unwrap_or_default(),
            self.landing_url.unwrap_or_default(),
            self.product_type.unwrap_or_default(),
        )?;

        if let Some(code) = self.language {
            request = request.with_language_code(&code);
        }
        if let Some(model) = self.ai_model {
            request = request.with_ai_model(model);
        }
        Ok(request)
    }
}
