use super::ResponseValidator;
use crate::config::AdCopyConfig;
use crate::domain::{
    AggregateResult, GenerationInput, GenerationRequest, Platform, PlatformFailure, PlatformResult,
};
use crate::infrastructure::openai::{build_prompts, build_system_message, OpenAiClient};
use crate::infrastructure::scraper::ContentExtractor;
use adcopy_errors::AppError;
use futures_util::future::join_all;

pub struct GenerateAdCopy {
    extractor: ContentExtractor,
    client: Option<OpenAiClient>,
}

impl GenerateAdCopy {
    pub fn new(config: &AdCopyConfig) -> Self {
        let client = config
            .api_key
            .clone()
            .map(|key| OpenAiClient::new(key, &config.api_base, config.completion));

        Self {
            extractor: ContentExtractor::new(),
            client,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.client.is_some()
    }

    /// Entry point shared by the HTTP handlers and the server function.
    /// The credential is checked before the input is validated.
    pub async fn run(
        &self,
        input: GenerationInput,
    ) -> Result<(GenerationRequest, AggregateResult), AppError> {
        if !self.has_api_key() {
            return Err(AppError::MissingApiKey);
        }

        let request = input.into_request()?;
        let aggregate = self.execute(&request).await?;
        Ok((request, aggregate))
    }

    /// Scrapes the landing page and asks the model for copy on every
    /// platform. Only a missing credential fails the whole request; other
    /// failures are recorded in the affected platform's slot.
    pub async fn execute(&self, request: &GenerationRequest) -> Result<AggregateResult, AppError> {
        let client = self.client.as_ref().ok_or(AppError::MissingApiKey)?;

        tracing::info!(
            "Generating ad copy for {} ({}) in {} with {}",
            request.company_name(),
            request.landing_url(),
            request.language().display_name(),
            request.ai_model()
        );

        let content = self.extractor.extract(request.landing_url()).await;
        let system_message = build_system_message(request.language());
        let prompts = build_prompts(
            request.company_name(),
            request.product_type(),
            &content,
            request.language(),
        );

        let system_message = &system_message;
        let entries = join_all(prompts.into_iter().map(|(platform, prompt)| async move {
            let result = generate_for_platform(
                client,
                platform,
                request.ai_model(),
                system_message,
                &prompt,
            )
            .await;
            (platform, result)
        }))
        .await;

        let aggregate = AggregateResult::new(entries);
        tracing::info!(
            "Finished ad copy for {}: {} of {} platforms failed",
            request.company_name(),
            aggregate.failure_count(),
            aggregate.len()
        );
        Ok(aggregate)
    }
}

async fn generate_for_platform(
    client: &OpenAiClient,
    platform: Platform,
    model: &str,
    system_message: &str,
    prompt: &str,
) -> PlatformResult {
    match client.complete(model, system_message, prompt).await {
        Ok(raw) => {
            let result = ResponseValidator::validate(platform, &raw);
            if let PlatformResult::Failure(failure) = &result {
                tracing::warn!("{}: {}", failure.error, failure.details);
            }
            result
        }
        Err(e) => {
            let details = e.details().map(str::to_string).unwrap_or_else(|| e.to_string());
            tracing::warn!("Completion failed for {}: {}", platform, details);
            PlatformResult::Failure(PlatformFailure::new(
                format!("Error generating ad copy for {}", platform),
                details,
            ))
        }
    }
}
