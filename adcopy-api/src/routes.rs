use crate::render::{render_error_page, render_results_page};
use adcopy_app::domain::{AggregateResult, GenerationInput};
use adcopy_app::AppContext;
use adcopy_errors::AppError;
use adcopy_ui::pages::GenerateAdsFn;
use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::Request,
    response::{Html, IntoResponse, Response},
    routing::post,
    Form, Json, Router,
};
use leptos::prelude::provide_context;
use leptos_axum::handle_server_fns_with_context;
use std::any::Any;

pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/generate-ads", post(generate_ads))
        .route("/generate", post(generate_from_form))
        .with_state(ctx)
}

/// Server function endpoints under `/api`, with the context the functions
/// expect in scope.
pub fn server_fn_router(ctx: AppContext) -> Router {
    server_fn::axum::register_explicit::<GenerateAdsFn>();
    tracing::info!("Registered server function: GenerateAdsFn");

    Router::new().route(
        "/api/{*fn_name}",
        post(move |req: Request<Body>| {
            let ctx = ctx.clone();
            async move {
                handle_server_fns_with_context(move || provide_context(ctx.clone()), req).await
            }
        }),
    )
}

/// Turns a handler panic into the generic 500 body.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "handler panicked".to_string()
    };
    tracing::error!("Request handler panicked: {}", details);
    AppError::Internal(details).into_response()
}

/// POST /generate-ads
async fn generate_ads(
    State(ctx): State<AppContext>,
    payload: Result<Json<GenerationInput>, JsonRejection>,
) -> Result<Json<AggregateResult>, AppError> {
    if !ctx.generate_ad_copy.has_api_key() {
        return Err(AppError::MissingApiKey);
    }

    let Json(input) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    let (_, aggregate) = ctx.generate_ad_copy.run(input).await?;
    Ok(Json(aggregate))
}

/// POST /generate
async fn generate_from_form(
    State(ctx): State<AppContext>,
    Form(input): Form<GenerationInput>,
) -> Html<String> {
    match ctx.generate_ad_copy.run(input).await {
        Ok((request, aggregate)) => Html(render_results_page(&request, &aggregate.summaries())),
        Err(e) => {
            tracing::warn!("Form generation failed: {}", e);
            Html(render_error_page(e.user_message()))
        }
    }
}
