// src/llm/provider/openai.rs
// OpenAI legacy text-completions provider

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::time::Instant;
use tracing::{debug, error};

use super::{Completion, CompletionProvider, CompletionRequest};
use crate::error::UpstreamError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiCompletions {
    client: Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for OpenAiCompletions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiCompletions")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl OpenAiCompletions {
    pub fn new(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/completions", self.base_url)
    }
}

/// Pull the first choice out of a completions response body
fn parse_completion(raw: &Value, latency_ms: i64) -> Result<Completion, UpstreamError> {
    let choice = &raw["choices"][0];
    let text = choice["text"]
        .as_str()
        .ok_or_else(|| UpstreamError::Malformed("no text in first choice".to_string()))?
        .to_string();

    Ok(Completion {
        text,
        finish_reason: choice["finish_reason"].as_str().map(String::from),
        latency_ms,
    })
}

#[async_trait]
impl CompletionProvider for OpenAiCompletions {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<Completion, UpstreamError> {
        let start = Instant::now();
        debug!(
            "OpenAI completion request: model={}, max_tokens={}, temperature={}",
            request.model, request.max_tokens, request.temperature
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            error!(status = status.as_u16(), body = %body, "OpenAI completion failed");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.json::<Value>().await?;
        let latency_ms = start.elapsed().as_millis() as i64;
        let completion = parse_completion(&raw, latency_ms)?;

        debug!(
            "OpenAI completion done in {}ms (finish_reason={:?})",
            completion.latency_ms, completion.finish_reason
        );
        Ok(completion)
    }
}
