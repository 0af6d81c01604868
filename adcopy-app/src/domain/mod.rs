mod ad_copy;
mod generation_request;
mod language;
mod platform;

pub use ad_copy::{
    AdSet, AdVariant, AggregateResult, NamedAdVariant, PlatformFailure, PlatformResult,
    PlatformSummary,
};
pub use generation_request::{GenerationInput, GenerationRequest, AI_MODELS, DEFAULT_AI_MODEL};
pub use language::Language;
pub use platform::{Platform, PlatformLimits};
