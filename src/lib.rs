//! Snoozeless Relay Service
//!
//! A small HTTP relay that accepts a short free-text "intent" (e.g. "pep
//! talk"), wraps it in a fixed voice-assistant prompt, forwards it to the
//! Gemini generateContent API and serves both the live result and the most
//! recent input/output pair.
//!
//! # Architecture
//!
//! - Three routes: `GET /` (availability), `POST /gemini` (generate),
//!   `GET /latest` (last stored interaction)
//! - One shared mutable record of the most recent interaction, guarded by
//!   a read/write lock inside [`state::AppState`]
//! - One external capability: a [`provider::TextGenerator`], substitutable
//!   with a stub in tests
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use snoozeless::{config::{ApiConfig, GeminiConfig}, provider::GeminiClient, state::AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let gemini = GeminiClient::new(Some("key".into()), &GeminiConfig::default())?;
//!     let state = Arc::new(AppState::new(Arc::new(gemini)));
//!     snoozeless::run_server(state, ApiConfig::default()).await
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod prompt;
pub mod provider;
pub mod router;
pub mod state;

mod middleware;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::state::AppState;

/// Run the HTTP relay server until ctrl-c.
///
/// Binds the listener, wires routes and middleware from `config` and serves
/// requests against the shared `state`.
///
/// # Errors
///
/// Returns an error if the bind address is invalid, the port is already in
/// use, or the server encounters a fatal I/O error.
pub async fn run_server(state: Arc<AppState>, config: ApiConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Snoozeless relay listening on http://{}", addr);

    let app = router::configure_routes(state, &config);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received, stopping server");
}
