// src/api/http/prompt.rs
// POST /api/prompt

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Serialize;
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::error::GatewayError;
use crate::services::PromptRequest;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct PromptResponse {
    pub result: String,
}

/// Build the prompt, run the completion, return the trimmed text
pub async fn prompt_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> ApiResult<Json<PromptResponse>> {
    // Missing credential wins over any body problem
    if !app_state.gateway.is_configured() {
        return Err(GatewayError::NotConfigured.into());
    }

    let Json(request) = payload?;
    let completion = app_state.gateway.complete(&request).await?;

    Ok(Json(PromptResponse {
        result: completion.text.trim().to_string(),
    }))
}
