//! Generation endpoint: relays an intent to the provider.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::prompt;
use crate::state::AppState;

/// Request body for `POST /gemini`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The intent text. Absent and empty are both rejected.
    #[serde(default)]
    pub text: Option<String>,
}

/// Successful response body for `POST /gemini`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Fixed success confirmation.
    pub message: String,
    /// The trimmed intent that was relayed.
    pub input: String,
    /// The provider's generated text.
    pub response: String,
}

/// Handle `POST /gemini`.
///
/// Trims the input, builds the fixed prompt around it, calls the provider
/// and, only on success, overwrites the stored interaction. A provider
/// failure leaves the previous record intact and surfaces as 500.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateRequest>,
) -> ApiResult<Json<GenerateResponse>> {
    let request_id = uuid::Uuid::new_v4();

    let user_text = payload.text.as_deref().unwrap_or("").trim().to_string();
    if user_text.is_empty() {
        return Err(ApiError::BadRequest("No text provided".to_string()));
    }

    tracing::info!(
        request_id = %request_id,
        input = %user_text,
        "New intent received"
    );

    let prompt = prompt::build_prompt(&user_text);

    // No lock is held here; a slow provider must not block other requests.
    let output = state.provider().generate(&prompt).await.map_err(|e| {
        tracing::error!(
            request_id = %request_id,
            input = %user_text,
            error = %e,
            "Generation failed"
        );
        e
    })?;

    state.record(user_text.clone(), output.clone());

    tracing::info!(
        request_id = %request_id,
        response_length = output.len(),
        "Generation successful"
    );

    Ok(Json(GenerateResponse {
        message: "✅ Received text successfully!".to_string(),
        input: user_text,
        response: output,
    }))
}
