use crate::infrastructure::error_chain;
use adcopy_errors::AppError;
use scraper::{Html, Selector};

pub const MAX_CONTENT_CHARS: usize = 2000;

const TEXT_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p";

/// Fetches landing pages and reduces them to heading and paragraph text.
pub struct ContentExtractor {
    http_client: reqwest::Client,
}

impl ContentExtractor {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
        }
    }

    /// Never fails: a fetch error is logged and its message comes back in
    /// place of the page text.
    pub async fn extract(&self, url: &str) -> String {
        match self.try_extract(url).await {
            Ok(content) => content,
            Err(e) => {
                let message = e.details().map(str::to_string).unwrap_or_else(|| e.to_string());
                tracing::warn!("Content extraction failed for {}: {}", url, message);
                truncate_chars(&message, MAX_CONTENT_CHARS)
            }
        }
    }

    /// The response status is not inspected; error pages are parsed like
    /// any other document.
    pub async fn try_extract(&self, url: &str) -> Result<String, AppError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::ScrapingFailed(error_chain(&e)))?;

        let html = response
            .text()
            .await
            .map_err(|e| AppError::ScrapingFailed(error_chain(&e)))?;

        let content = extract_text(&html);
        tracing::info!(
            "Extracted {} characters from {}",
            content.chars().count(),
            url
        );
        Ok(content)
    }
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Text of every heading and paragraph in document order, joined by single
/// spaces and capped at [`MAX_CONTENT_CHARS`] characters.
pub fn extract_text(html: &str) -> String {
    let Ok(selector) = Selector::parse(TEXT_SELECTOR) else {
        return String::new();
    };

    let document = Html::parse_document(html);
    let joined = document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");

    truncate_chars(&joined, MAX_CONTENT_CHARS)
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_headings_and_paragraphs_in_document_order() {
        let html = r#"<html><head><title>Ignored</title></head><body>
            <h2>Second level</h2>
            <div>not picked</div>
            <p>First paragraph</p>
            <h1>Top</h1>
            <p>Last</p>
        </body></html>"#;

        assert_eq!(
            extract_text(html),
            "Second level First paragraph Top Last"
        );
    }

    #[test]
    fn includes_inline_markup_text() {
        let html = "<p>Fast <strong>and</strong> cheap</p><h6>tiny</h6>";
        assert_eq!(extract_text(html), "Fast and cheap tiny");
    }

    #[test]
    fn caps_content_at_2000_characters() {
        let paragraph = "é".repeat(1500);
        let html = format!("<p>{paragraph}</p><p>{paragraph}</p>");
        let text = extract_text(&html);
        assert_eq!(text.chars().count(), MAX_CONTENT_CHARS);
    }

    #[test]
    fn page_without_text_elements_is_empty() {
        assert_eq!(extract_text("<div>nothing here</div>"), "");
    }

    #[tokio::test]
    async fn fetches_and_extracts_page() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/landing")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<h1>Acme Cloud</h1><p>Ship faster.</p>")
            .create_async()
            .await;

        let extractor = ContentExtractor::new();
        let content = extractor
            .extract(&format!("{}/landing", server.url()))
            .await;
        assert_eq!(content, "Acme Cloud Ship faster.");
    }

    #[tokio::test]
    async fn error_status_pages_are_still_parsed() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("<h1>Not Found</h1>")
            .create_async()
            .await;

        let content = ContentExtractor::new()
            .try_extract(&format!("{}/missing", server.url()))
            .await
            .unwrap();
        assert_eq!(content, "Not Found");
    }

    #[tokio::test]
    async fn network_failure_is_returned_as_content() {
        let extractor = ContentExtractor::new();
        let url = "http://127.0.0.1:1/unreachable";

        let err = extractor.try_extract(url).await.unwrap_err();
        let AppError::ScrapingFailed(message) = err else {
            panic!("expected ScrapingFailed");
        };

        assert!(message.to_lowercase().contains("connection refused"));

        let content = extractor.extract(url).await;
        assert!(content.to_lowercase().contains("connection refused"));
        assert!(content.chars().count() <= message.chars().count());
        assert!(content.chars().count() <= MAX_CONTENT_CHARS);
    }

    #[tokio::test]
    async fn malformed_url_is_returned_as_content() {
        let content = ContentExtractor::new().extract("not a url").await;
        assert!(!content.is_empty());
        assert!(content.chars().count() <= MAX_CONTENT_CHARS);
    }
}
