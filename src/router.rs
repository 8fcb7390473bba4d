//! Router configuration and setup.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

use crate::config::ApiConfig;
use crate::middleware;
use crate::routes;
use crate::state::AppState;

/// Build the router with all routes and middleware.
///
/// Layers are applied before the state so the returned router is fully
/// typed; tests call this directly and drive it with `tower::ServiceExt`.
pub fn configure_routes(state: Arc<AppState>, config: &ApiConfig) -> Router {
    Router::new()
        .route("/", get(routes::health::home))
        .route("/gemini", post(routes::generate::generate))
        .route("/latest", get(routes::latest::latest))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
        .layer(middleware::cors_layer(config))
        .with_state(state)
}
