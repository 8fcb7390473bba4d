//! Integration tests for the relay's HTTP surface.
//!
//! These drive the real router with `tower::ServiceExt::oneshot` and a
//! stubbed text-generation provider, so every status code and body shape
//! below is the exact contract a client sees.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use snoozeless::config::ApiConfig;
use snoozeless::provider::{ProviderError, TextGenerator};
use snoozeless::router::configure_routes;
use snoozeless::state::AppState;

/// Provider stub: echoes a fixed reply or fails every call.
struct StubProvider {
    reply: Option<String>,
}

impl StubProvider {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(text.to_string()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self { reply: None })
    }
}

#[async_trait]
impl TextGenerator for StubProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        self.reply.clone().ok_or(ProviderError::Api {
            status: 503,
            message: "model overloaded".to_string(),
        })
    }
}

fn test_app(provider: Arc<StubProvider>) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(provider));
    let app = configure_routes(state.clone(), &ApiConfig::default());
    (app, state)
}

fn post_gemini(body: Value) -> Request<Body> {
    Request::builder()
        .uri("/gemini")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_always_returns_200() {
    // Provider state is irrelevant to the availability route.
    let (app, _) = test_app(StubProvider::failing());

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("running"));
}

#[tokio::test]
async fn latest_is_404_before_any_generation() {
    let (app, _) = test_app(StubProvider::replying("unused"));

    let response = app.oneshot(get("/latest")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "No previous interaction yet." })
    );
}

#[tokio::test]
async fn pep_talk_scenario() {
    let (app, _) = test_app(StubProvider::replying("You can do this! Don't stop now."));

    let response = app
        .clone()
        .oneshot(post_gemini(json!({ "text": "pep talk" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "message": "✅ Received text successfully!",
            "input": "pep talk",
            "response": "You can do this! Don't stop now."
        })
    );

    let response = app.oneshot(get("/latest")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "text": "pep talk",
            "response": "You can do this! Don't stop now."
        })
    );
}

#[tokio::test]
async fn empty_text_is_400_and_does_not_touch_state() {
    let (app, state) = test_app(StubProvider::replying("unused"));
    state.record("before".to_string(), "before reply".to_string());

    let response = app
        .oneshot(post_gemini(json!({ "text": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "No text provided" }));

    let latest = state.latest().unwrap();
    assert_eq!(latest.text, "before");
    assert_eq!(latest.response, "before reply");
}

#[tokio::test]
async fn missing_text_field_is_400() {
    let (app, state) = test_app(StubProvider::replying("unused"));

    let response = app.oneshot(post_gemini(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "No text provided" }));
    assert!(state.latest().is_none());
}

#[tokio::test]
async fn provider_failure_is_500_and_preserves_previous_record() {
    let (app, state) = test_app(StubProvider::failing());
    state.record("earlier".to_string(), "earlier reply".to_string());

    let response = app
        .clone()
        .oneshot(post_gemini(json!({ "text": "motivation" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("model overloaded"));

    let response = app.oneshot(get("/latest")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "text": "earlier", "response": "earlier reply" })
    );
}

#[tokio::test]
async fn provider_failure_with_no_prior_record_leaves_latest_404() {
    let (app, _) = test_app(StubProvider::failing());

    let response = app
        .clone()
        .oneshot(post_gemini(json!({ "text": "pep talk" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = app.oneshot(get("/latest")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn second_generation_overwrites_the_first() {
    let (app, state) = test_app(StubProvider::replying("Keep pushing. Stay awake."));

    for intent in ["a", "b"] {
        let response = app
            .clone()
            .oneshot(post_gemini(json!({ "text": intent })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Only b's pair survives; no history accumulates.
    let latest = state.latest().unwrap();
    assert_eq!(latest.text, "b");
    assert_eq!(latest.response, "Keep pushing. Stay awake.");

    let response = app.oneshot(get("/latest")).await.unwrap();
    assert_eq!(
        body_json(response).await,
        json!({ "text": "b", "response": "Keep pushing. Stay awake." })
    );
}

#[tokio::test]
async fn input_is_trimmed_in_the_stored_record() {
    let (app, state) = test_app(StubProvider::replying("Two sentences. Stay up."));

    let response = app
        .oneshot(post_gemini(json!({ "text": "  scary voice \n" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(state.latest().unwrap().text, "scary voice");
}

#[tokio::test]
async fn reads_stay_responsive_while_a_generation_is_in_flight() {
    use std::time::Duration;

    /// Provider that parks forever, simulating an uncapped upstream call.
    struct HangingProvider;

    #[async_trait]
    impl TextGenerator for HangingProvider {
        async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
            std::future::pending::<()>().await;
            unreachable!()
        }
    }

    let state = Arc::new(AppState::new(Arc::new(HangingProvider)));
    let app = configure_routes(state.clone(), &ApiConfig::default());

    let slow = tokio::spawn(
        app.clone()
            .oneshot(post_gemini(json!({ "text": "motivation" }))),
    );
    // Give the generation a moment to start before probing.
    tokio::time::sleep(Duration::from_millis(50)).await;

    let response = tokio::time::timeout(Duration::from_secs(1), app.oneshot(get("/")))
        .await
        .expect("health check must not block behind a slow generation")
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    slow.abort();
}
