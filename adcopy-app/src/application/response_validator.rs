use crate::domain::{AdSet, Platform, PlatformFailure, PlatformResult};
use serde_json::Value;

const RAW_CONTENT_PREVIEW_CHARS: usize = 200;

/// Structural check of model output. Headline and description lengths are
/// not enforced; the limits only reach the model through the prompt.
pub struct ResponseValidator;

impl ResponseValidator {
    pub fn validate(platform: Platform, raw: &str) -> PlatformResult {
        let content = raw.trim();

        let value = match serde_json::from_str::<Value>(content) {
            Ok(value) => value,
            Err(e) => {
                return PlatformResult::Failure(
                    PlatformFailure::new(
                        format!("Invalid JSON response for {}", platform),
                        e.to_string(),
                    )
                    .with_raw_content(preview(content)),
                );
            }
        };

        let ads = match value {
            Value::Object(map) => map,
            other => {
                return Self::structure_error(
                    platform,
                    format!("Expected dictionary, got {}", json_type_name(&other)),
                    content,
                );
            }
        };

        if !ads.keys().any(|key| key.starts_with("ad")) {
            return Self::structure_error(platform, "No ad keys found in response", content);
        }

        PlatformResult::Success(AdSet::new(content.to_string(), ads))
    }

    fn structure_error(
        platform: Platform,
        details: impl Into<String>,
        content: &str,
    ) -> PlatformResult {
        PlatformResult::Failure(
            PlatformFailure::new(format!("Invalid JSON structure for {}", platform), details)
                .with_raw_content(preview(content)),
        )
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn preview(content: &str) -> String {
    if content.chars().count() > RAW_CONTENT_PREVIEW_CHARS {
        let head: String = content.chars().take(RAW_CONTENT_PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        content.to_string()
    }
}
