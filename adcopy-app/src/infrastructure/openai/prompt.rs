use crate::domain::{Language, Platform};

pub fn build_system_message(language: Language) -> String {
    format!(
        "You are a professional social media advertising copywriter. \
         Always respond with valid JSON only. Do not include any explanatory text. \
         Generate content in {}.",
        language.display_name()
    )
}

/// Landing page content is embedded as-is.
pub fn build_ad_prompt(
    platform: Platform,
    company_name: &str,
    product_type: &str,
    content: &str,
    language: Language,
) -> String {
    let limits = platform.limits();

    format!(
        r#"Create 3 different ad copies for {platform} for {company_name}, a {product_type} company.
The ad copies should be in {language}.
Use this landing page content as reference: {content}

For each ad copy, provide:
1. Headline (max {headline_limit} characters)
2. Description (max {description_limit} characters)
3. Call to action

Format the response as JSON with the following structure:
{{
    "ad1": {{"headline": "", "description": "", "cta": ""}},
    "ad2": {{"headline": "", "description": "", "cta": ""}},
    "ad3": {{"headline": "", "description": "", "cta": ""}}
}}

IMPORTANT: Your response must be valid JSON. Do not include any text before or after the JSON object."#,
        platform = platform.as_str(),
        company_name = company_name,
        product_type = product_type,
        language = language.display_name(),
        content = content,
        headline_limit = limits.headline,
        description_limit = limits.description,
    )
}

pub fn build_prompts(
    company_name: &str,
    product_type: &str,
    content: &str,
    language: Language,
) -> Vec<(Platform, String)> {
    Platform::ALL
        .into_iter()
        .map(|platform| {
            let prompt = build_ad_prompt(platform, company_name, product_type, content, language);
            (platform, prompt)
        })
        .collect()
}
