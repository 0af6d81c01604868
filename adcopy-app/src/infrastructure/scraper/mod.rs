mod content_extractor;

pub use content_extractor::{extract_text, ContentExtractor, MAX_CONTENT_CHARS};
