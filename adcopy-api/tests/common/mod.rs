//! Shared helpers for route tests.
#![allow(dead_code)]

use adcopy_app::config::AdCopyConfig;
use adcopy_app::AppContext;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const VALID_ADS: &str = r#"{"ad1":{"headline":"Bill faster","description":"Invoices in minutes","cta":"Start free"},"ad2":{"headline":"Get paid","description":"Automatic reminders","cta":"Try it"},"ad3":{"headline":"Less admin","description":"Focus on work","cta":"Sign up"}}"#;

/// Router whose completion provider is the given mock server.
pub fn build_test_app(server: &mockito::ServerGuard) -> Router {
    let api_base = format!("{}/v1", server.url()).parse().unwrap();
    let config = AdCopyConfig::without_api_key()
        .with_api_key("sk-test")
        .with_api_base(api_base);
    adcopy_api::router(AppContext::new(&config))
}

pub fn build_app_without_key() -> Router {
    adcopy_api::router(AppContext::new(&AdCopyConfig::without_api_key()))
}

pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    })
    .to_string()
}

pub async fn landing_page(server: &mut mockito::ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/landing")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<h1>Acme Invoicing</h1><p>Send invoices and get paid faster.</p>")
        .create_async()
        .await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: &str,
    body: String,
) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}

/// Send a POST request with a JSON body and return the decoded response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let (status, text) = post_raw(app, uri, "application/json", body.to_string()).await;
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    (status, json)
}

/// Send a urlencoded form and return the rendered page.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> (StatusCode, String) {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    post_raw(app, uri, "application/x-www-form-urlencoded", body).await
}
