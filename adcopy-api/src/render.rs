use adcopy_app::domain::{GenerationRequest, PlatformSummary};

pub fn render_results_page(request: &GenerationRequest, summaries: &[PlatformSummary]) -> String {
    let company = escape_html(request.company_name());
    let tabs: String = summaries
        .iter()
        .map(|summary| {
            format!(
                r##"<a class="tabs__tab" href="#{id}">{label}</a>"##,
                id = summary.platform.as_str(),
                label = summary.platform.label(),
            )
        })
        .collect();
    let sections: String = summaries.iter().map(render_platform_section).collect();

    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Ad Copies: {company}</title>
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
        <div class="results">
            <h2 class="results__title">Ad copies for {company}</h2>
            <p class="results__meta">{language} &middot; {model}</p>
            <nav class="tabs">{tabs}</nav>
            <div class="platforms">{sections}</div>
            <div class="results__actions">
                <a href="/" class="results__button" style="text-decoration:none;display:inline-block;">Generate Again</a>
            </div>
        </div>
    </main>
    <script>{COPY_SCRIPT}</script>
</body>
</html>"#,
        company = company,
        language = request.language().display_name(),
        model = escape_html(request.ai_model()),
        tabs = tabs,
        sections = sections,
        CSS = CSS,
        COPY_SCRIPT = COPY_SCRIPT,
    )
}

fn render_platform_section(summary: &PlatformSummary) -> String {
    let label = summary.platform.label();

    let body = match &summary.error {
        Some(error) => format!(
            r#"<div class="error"><p class="error__title">Error generating {label} ads: {error}</p><p class="error__message">{details}</p></div>"#,
            label = label,
            error = escape_html(error),
            details = escape_html(summary.details.as_deref().unwrap_or_default()),
        ),
        None if summary.variants.is_empty() => format!(
            r#"<div class="error"><p class="error__title">Unable to generate {} ads. Please try again.</p></div>"#,
            label
        ),
        None => summary
            .variants
            .iter()
            .map(|named| {
                let ad = &named.variant;
                format!(
                    r#"<div class="ad-copy">
    <h3 class="ad-copy__key">{key}</h3>
    <p><strong>Headline:</strong> {headline}</p>
    <p><strong>Description:</strong> {description}</p>
    <p><strong>Call to Action:</strong> {cta}</p>
    <p class="ad-copy__hint">Copy this text:</p>
    <pre class="ad-copy__text">{full_text}</pre>
    <button type="button" class="ad-copy__copy" data-copy="{full_text}">Copy</button>
</div>"#,
                    key = escape_html(&named.key.to_uppercase()),
                    headline = escape_html(&ad.headline),
                    description = escape_html(&ad.description),
                    cta = escape_html(&ad.cta),
                    full_text = escape_html(&ad.full_text()),
                )
            })
            .collect(),
    };

    format!(
        r#"<section class="platform" id="{id}">
    <h3 class="platform__title">{label}</h3>{body}
</section>"#,
        id = summary.platform.as_str(),
        label = label,
        body = body
    )
}

pub fn render_error_page(message: &str) -> String {
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Error - Social Ad Copy Generator</title>
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
        <div class="error">
            <p class="error__title">Something went wrong</p>
            <p class="error__message">{message}</p>
            <a href="/" class="error__retry" style="text-decoration:none;display:inline-block;margin-top:1rem;">Try Again</a>
        </div>
    </main>
</body>
</html>"#, message = escape_html(message), CSS = CSS)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const COPY_SCRIPT: &str = r#"
document.querySelectorAll('.ad-copy__copy').forEach(function(button) {
    button.addEventListener('click', function() {
        navigator.clipboard.writeText(button.dataset.copy).then(function() {
            button.textContent = 'Copied!';
            setTimeout(function() { button.textContent = 'Copy'; }, 2000);
        });
    });
});
"#;

pub const CSS: &str = r#"
:root {
    --base: #f5f6fa;
    --surface: #ffffff;
    --border: #dcdde1;
    --muted: #7f8fa6;
    --text: #2c3e50;
    --accent: #2374ff;
    --accent-dark: #1a5acc;
    --danger: #c0392b;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 860px; margin: 0 auto; padding: 1.5rem; }
.hero { text-align: center; padding: 3rem 0 2rem; }
.hero__title { font-size: clamp(2rem, 5vw, 2.75rem); color: var(--accent); font-weight: 800; margin-bottom: 0.75rem; }
.hero__subtitle { color: var(--muted); font-size: 1.1rem; max-width: 560px; margin: 0 auto; }
.ad-form { display: flex; flex-direction: column; gap: 0.5rem; margin: 2rem 0; background: var(--surface); padding: 1.5rem; border-radius: 12px; border: 2px solid var(--border); }
.ad-form__label { font-weight: 600; margin-top: 0.5rem; }
.ad-form__input { padding: 0.75rem 1rem; border: 2px solid var(--border); border-radius: 8px; font-size: 1rem; background: var(--surface); color: var(--text); }
.ad-form__input:focus { outline: none; border-color: var(--accent); }
.ad-form__button { margin-top: 1rem; padding: 0.9rem 2rem; background: var(--accent); color: #fff; border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer; }
.ad-form__button:hover { background: var(--accent-dark); }
.ad-form__button:disabled { background: var(--muted); cursor: wait; }
.results { margin: 2rem 0; }
.results__title { color: var(--accent); font-size: 1.6rem; }
.results__meta { color: var(--muted); margin-bottom: 1.5rem; }
.results__actions { margin-top: 1.5rem; }
.results__button { padding: 0.75rem 1.5rem; background: var(--accent); color: #fff; border-radius: 8px; font-weight: 600; }
.tabs { display: flex; gap: 0.25rem; border-bottom: 2px solid var(--border); margin-bottom: 1.5rem; }
.tabs__tab { padding: 0.6rem 1.2rem; color: var(--muted); text-decoration: none; font-weight: 600; border-radius: 8px 8px 0 0; }
.tabs__tab:hover { color: var(--accent); background: var(--surface); }
.platform { display: none; margin-bottom: 2rem; }
.platform:target { display: block; }
.platforms:not(:has(.platform:target)) .platform:first-child { display: block; }
.platform__title { font-size: 1.3rem; padding-bottom: 0.5rem; margin-bottom: 1rem; border-bottom: 2px solid var(--border); }
.ad-copy { background: var(--surface); padding: 1.5rem; border-radius: 12px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); margin-bottom: 1.5rem; border: 2px solid var(--border); }
.ad-copy:hover { border-color: var(--accent); }
.ad-copy p { margin-bottom: 0.5rem; line-height: 1.6; }
.ad-copy__key { color: var(--accent); margin-bottom: 0.75rem; }
.ad-copy__hint { font-weight: 600; margin-top: 0.75rem; }
.ad-copy__copy { margin-top: 0.75rem; padding: 0.5rem 1rem; background: var(--accent); color: #fff; border: none; border-radius: 6px; font-weight: 600; cursor: pointer; }
.ad-copy__copy:hover { background: var(--accent-dark); }
.ad-copy__text { white-space: pre-wrap; background: var(--base); padding: 1rem; border-radius: 8px; font-family: inherit; }
.error { background: #fdecea; border: 2px solid var(--danger); border-radius: 8px; padding: 1.25rem; margin: 1rem 0; }
.error__title { color: var(--danger); font-weight: 700; margin-bottom: 0.5rem; }
.error__message { color: #7b241c; word-break: break-word; }
.error__retry { padding: 0.5rem 1rem; background: var(--danger); color: #fff; border-radius: 4px; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use adcopy_app::domain::{AdVariant, NamedAdVariant, Platform};

    fn request() -> GenerationRequest {
        GenerationRequest::new("Acme & Co", "http://example.com", "SaaS").unwrap()
    }

    #[test]
    fn results_page_shows_each_variant() {
        let summaries = vec![PlatformSummary {
            platform: Platform::Tiktok,
            variants: vec![NamedAdVariant {
                key: "ad1".to_string(),
                variant: AdVariant {
                    headline: "Ship <faster>".to_string(),
                    description: "Invoices in minutes".to_string(),
                    cta: "Try free".to_string(),
                },
            }],
            error: None,
            details: None,
        }];

        let html = render_results_page(&request(), &summaries);
        assert!(html.contains("Ad copies for Acme &amp; Co"));
        assert!(html.contains("<h3 class=\"platform__title\">TikTok</h3>"));
        assert!(html.contains("AD1"));
        assert!(html.contains("Ship &lt;faster&gt;"));
        assert!(!html.contains("Ship <faster>"));
        assert!(html.contains("English &middot; gpt-3.5-turbo"));
    }

    #[test]
    fn results_page_has_a_tab_per_platform_and_copy_buttons() {
        let summaries: Vec<_> = Platform::ALL
            .iter()
            .map(|&platform| PlatformSummary {
                platform,
                variants: vec![NamedAdVariant {
                    key: "ad1".to_string(),
                    variant: AdVariant {
                        headline: "Say \"hi\"".to_string(),
                        description: "D".to_string(),
                        cta: "C".to_string(),
                    },
                }],
                error: None,
                details: None,
            })
            .collect();

        let html = render_results_page(&request(), &summaries);
        assert!(html.contains(r##"<a class="tabs__tab" href="#facebook">Facebook</a>"##));
        assert!(html.contains(r##"<a class="tabs__tab" href="#linkedin">LinkedIn</a>"##));
        assert!(html.contains(r#"<section class="platform" id="tiktok">"#));
        assert_eq!(html.matches(r#"class="ad-copy__copy""#).count(), 4);
        assert!(html.contains("data-copy=\"Say &quot;hi&quot;\n\nD\n\nC\""));
    }

    #[test]
    fn failed_platform_shows_error() {
        let summaries = vec![PlatformSummary {
            platform: Platform::Facebook,
            variants: Vec::new(),
            error: Some("Invalid JSON response for facebook".to_string()),
            details: Some("expected value at line 1 column 1".to_string()),
        }];

        let html = render_results_page(&request(), &summaries);
        assert!(html.contains("Error generating Facebook ads: Invalid JSON response for facebook"));
        assert!(html.contains("expected value at line 1 column 1"));
    }

    #[test]
    fn success_without_usable_variants_asks_to_retry() {
        let summaries = vec![PlatformSummary {
            platform: Platform::Linkedin,
            variants: Vec::new(),
            error: None,
            details: None,
        }];

        let html = render_results_page(&request(), &summaries);
        assert!(html.contains("Unable to generate LinkedIn ads. Please try again."));
    }

    #[test]
    fn error_page_escapes_message() {
        let html = render_error_page("<b>bad</b>");
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
    }
}
