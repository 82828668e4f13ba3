// src/llm/provider/mod.rs
// Completion provider trait and request/response types

use async_trait::async_trait;
use serde::Serialize;

use crate::error::UpstreamError;

pub mod openai;

pub use openai::OpenAiCompletions;

/// Body of a single text-completion call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Raw provider output, untrimmed
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    pub finish_reason: Option<String>,
    pub latency_ms: i64,
}

/// Text-completion backend
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// One request, one response. No retries.
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, UpstreamError>;
}
