//! Snoozeless relay server binary.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snoozeless::config::{ApiConfig, CliArgs, GeminiConfig};
use snoozeless::provider::GeminiClient;
use snoozeless::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snoozeless=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    info!("Starting Snoozeless relay v{}", env!("CARGO_PKG_VERSION"));
    info!("Model: {}", args.model);

    if args.api_key.is_none() {
        warn!("GOOGLE_API_KEY is not set; generation requests will fail until it is provided");
    }

    let gemini = GeminiClient::new(args.api_key.clone(), &GeminiConfig::from_args(&args))?;
    let state = Arc::new(AppState::new(Arc::new(gemini)));

    snoozeless::run_server(state, ApiConfig::from_args(&args)).await
}
