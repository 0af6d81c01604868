use adcopy_app::domain::{Language, AI_MODELS, DEFAULT_AI_MODEL};
use leptos::prelude::*;

/// Plain HTML form; submission is handled server-side at `/generate` so it
/// works without client-side hydration.
#[component]
pub fn AdRequestForm() -> impl IntoView {
    view! {
        <form action="/generate" method="post" class="ad-form">
            <label class="ad-form__label" for="company_name">"Company Name"</label>
            <input
                id="company_name"
                type="text"
                name="company_name"
                class="ad-form__input"
                required
            />

            <label class="ad-form__label" for="product_type">"Product Type"</label>
            <input
                id="product_type"
                type="text"
                name="product_type"
                class="ad-form__input"
                placeholder="e.g. SaaS, e-commerce, mobile app"
                required
            />

            <label class="ad-form__label" for="landing_url">"Landing Page URL"</label>
            <input
                id="landing_url"
                type="url"
                name="landing_url"
                class="ad-form__input"
                placeholder="https://example.com"
                required
            />

            <label class="ad-form__label" for="language">"Language"</label>
            <select id="language" name="language" class="ad-form__input">
                {Language::ALL
                    .into_iter()
                    .map(|lang| {
                        view! {
                            <option value={lang.code()} selected={lang == Language::default()}>
                                {lang.display_name()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>

            <label class="ad-form__label" for="ai_model">"AI Model"</label>
            <select id="ai_model" name="ai_model" class="ad-form__input">
                {AI_MODELS
                    .iter()
                    .map(|(id, label)| {
                        view! {
                            <option value={*id} selected={*id == DEFAULT_AI_MODEL}>
                                {*label}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>

            <button type="submit" class="ad-form__button">"Generate Ad Copies"</button>
        </form>
    }
}
