//! Text-generation provider abstraction.
//!
//! The relay depends on exactly one external capability: turning a prompt
//! into response text. Modeling it as a trait keeps the HTTP layer
//! independent of the Gemini wire format and makes handlers trivially
//! testable with a stub.

use async_trait::async_trait;
use thiserror::Error;

mod gemini;

pub use gemini::GeminiClient;

/// Errors from the text-generation call.
///
/// Every failure mode of the remote call collapses into one of these; the
/// HTTP layer surfaces them as 500 with the message stringified.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// No API key was configured at startup
    #[error("GOOGLE_API_KEY is not set; cannot call the Gemini API")]
    MissingApiKey,

    /// Network-level failure (connect, timeout, body read)
    #[error("request to provider failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("provider returned status {status}: {message}")]
    Api {
        /// HTTP status code from the provider
        status: u16,
        /// Error body (or a placeholder if unreadable)
        message: String,
    },

    /// Provider answered 200 but with no usable candidate text
    #[error("provider returned no text")]
    EmptyResponse,
}

/// A provider that turns a prompt into generated text.
///
/// One method, one failure type. Implementations must be safe to share
/// across concurrent requests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a single completion for `prompt` and return the trimmed text.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
