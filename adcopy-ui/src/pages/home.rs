use crate::components::AdRequestForm;
use adcopy_app::domain::PlatformSummary;
use leptos::prelude::*;
use server_fn::ServerFnError;

/// Runs the full pipeline for clients that talk to server functions
/// directly. Returns one summary per platform, in platform order.
#[server(GenerateAdsFn, "/api", endpoint = "generate_ads")]
pub async fn generate_ads(
    company_name: String,
    landing_url: String,
    product_type: String,
    language: Option<String>,
    ai_model: Option<String>,
) -> Result<Vec<PlatformSummary>, ServerFnError> {
    use adcopy_app::domain::GenerationInput;
    use adcopy_app::AppContext;

    let ctx = expect_context::<AppContext>();
    let input = GenerationInput {
        company_name: Some(company_name),
        landing_url: Some(landing_url),
        product_type: Some(product_type),
        language,
        ai_model,
    };

    let (_, aggregate) = ctx.generate_ad_copy.run(input).await.map_err(|e| {
        tracing::warn!("Server function generation failed: {}", e);
        ServerFnError::new(e.user_message())
    })?;

    Ok(aggregate.summaries())
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="hero">
            <h1 class="hero__title">"Social Ad Copy Generator"</h1>
            <p class="hero__subtitle">
                "Generate optimized ad copies for Facebook, Instagram, TikTok and LinkedIn from your landing page"
            </p>
        </div>

        <AdRequestForm/>
    }
}
