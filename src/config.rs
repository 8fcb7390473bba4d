//! Configuration for the relay server.
//!
//! Supports:
//! - CLI arguments (highest priority)
//! - Environment variables
//! - Defaults (lowest priority)

use clap::Parser;
use url::Url;

/// Command-line arguments for the relay server.
#[derive(Parser, Debug, Clone)]
#[command(name = "snoozeless-server")]
#[command(about = "Snoozeless relay - forwards wake-up intents to the Gemini API")]
#[command(version)]
pub struct CliArgs {
    /// Port for the HTTP server
    #[arg(long, short = 'p', default_value = "5001", env = "SNOOZELESS_PORT")]
    pub port: u16,

    /// Host/interface to bind to
    #[arg(long, default_value = "0.0.0.0", env = "SNOOZELESS_HOST")]
    pub host: String,

    /// Gemini API key. Generation requests fail with a clear error if unset.
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Gemini model used for generation
    #[arg(long, default_value = "gemini-2.5-flash", env = "GEMINI_MODEL")]
    pub model: String,

    /// Log level filter
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,
}

/// Configuration for the HTTP surface.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host/interface to bind to.
    ///
    /// Default: `0.0.0.0`
    pub host: String,

    /// Port to bind the HTTP server to.
    ///
    /// Default: 5001
    pub port: u16,

    /// Enable Cross-Origin Resource Sharing (CORS).
    ///
    /// The relay is called from browser frontends, so this defaults to true.
    pub enable_cors: bool,

    /// Allowed origins for CORS requests.
    ///
    /// Use `["*"]` to allow all origins.
    ///
    /// Default: `["*"]`
    pub cors_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
            enable_cors: true,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ApiConfig {
    /// Build the API configuration from parsed CLI arguments.
    pub fn from_args(args: &CliArgs) -> Self {
        Self {
            host: args.host.clone(),
            port: args.port,
            ..Default::default()
        }
    }
}

/// Configuration for the Gemini provider client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base URL of the generative-language API.
    ///
    /// Overridable so tests can point the client at a local mock server.
    pub api_url: Url,

    /// Model identifier, e.g. `gemini-2.5-flash`.
    pub model: String,

    /// Outbound request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse("https://generativelanguage.googleapis.com")
                .expect("hardcoded API URL is valid"),
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 120,
        }
    }
}

impl GeminiConfig {
    /// Build the provider configuration from parsed CLI arguments.
    pub fn from_args(args: &CliArgs) -> Self {
        Self {
            model: args.model.clone(),
            ..Default::default()
        }
    }
}
