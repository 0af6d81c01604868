mod client;
mod prompt;
mod types;

pub use client::{OpenAiClient, DEFAULT_API_BASE};
pub use prompt::{build_ad_prompt, build_prompts, build_system_message};
pub use types::CompletionOptions;
