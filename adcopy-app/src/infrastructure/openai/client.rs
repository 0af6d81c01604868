use super::types::{
    ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse, CompletionOptions,
};
use crate::infrastructure::error_chain;
use adcopy_errors::AppError;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Chat-completion client for OpenAI-compatible APIs. One request per call,
/// no timeout and no retry.
pub struct OpenAiClient {
    http_client: reqwest::Client,
    api_key: String,
    endpoint: String,
    options: CompletionOptions,
}

impl OpenAiClient {
    pub fn new(api_key: String, api_base: &Url, options: CompletionOptions) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            endpoint: format!("{}/chat/completions", api_base.as_str().trim_end_matches('/')),
            options,
        }
    }

    pub async fn complete(
        &self,
        model: &str,
        system_message: &str,
        user_prompt: &str,
    ) -> Result<String, AppError> {
        let request = ChatCompletionRequest::new(
            model,
            system_message.to_string(),
            user_prompt.to_string(),
            self.options,
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::CompletionFailed(error_chain(&e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Completion API error: {} - {}", status, body);

            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(parsed) => format!("API error: {}: {}", status, parsed.error.message),
                Err(_) => format!("API error: {}", status),
            };
            return Err(AppError::CompletionFailed(message));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::CompletionFailed(error_chain(&e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AppError::CompletionFailed("No response from AI".to_string()))
    }
}
