use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("OpenAI API key not configured. Please add your API key to the .env file.")]
    MissingApiKey,

    #[error("Missing required fields. Please provide company name, landing URL, and product type.")]
    MissingFields,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to fetch landing page: {0}")]
    ScrapingFailed(String),

    #[error("Completion request failed: {0}")]
    CompletionFailed(String),

    #[error("An unexpected error occurred: {0}")]
    Internal(String),
}

impl AppError {
    /// The underlying cause without the variant prefix, as reported by the
    /// failing collaborator.
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::InvalidRequest(msg)
            | Self::ScrapingFailed(msg)
            | Self::CompletionFailed(msg)
            | Self::Internal(msg) => Some(msg),
            Self::MissingApiKey | Self::MissingFields => None,
        }
    }

    pub fn user_message(&self) -> &str {
        match self {
            Self::MissingApiKey => "OpenAI API key not configured. Please check your .env file.",
            Self::MissingFields => "Please fill in all required fields.",
            Self::InvalidRequest(_) => "The request could not be understood. Please try again.",
            Self::ScrapingFailed(_) => "Could not read the landing page. Check that the URL is reachable.",
            Self::CompletionFailed(_) => "The AI service is unavailable right now. Please try again later.",
            Self::Internal(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let (status, error) = match &self {
                AppError::MissingApiKey => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
                AppError::MissingFields => (StatusCode::BAD_REQUEST, self.to_string()),
                AppError::InvalidRequest(_) => {
                    (StatusCode::BAD_REQUEST, "Invalid request body".to_string())
                }
                AppError::ScrapingFailed(_) => {
                    (StatusCode::BAD_GATEWAY, "Failed to fetch landing page".to_string())
                }
                AppError::CompletionFailed(_) => {
                    (StatusCode::BAD_GATEWAY, "Completion request failed".to_string())
                }
                AppError::Internal(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                ),
            };
            let details = self.details().map(str::to_string);
            (status, Json(ErrorResponse { error, details })).into_response()
        }
    }

}
