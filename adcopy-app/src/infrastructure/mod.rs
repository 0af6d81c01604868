pub mod openai;
pub mod scraper;

use std::error::Error;

/// The error's message followed by each distinct message in its source
/// chain, separated by `: `. Transport errors keep the underlying cause
/// (refused connection, DNS failure) this way.
pub(crate) fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
