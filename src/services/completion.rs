// src/services/completion.rs
// Completion gateway: validate, build the prompt, call the provider once

use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::error::{GatewayError, ValidationError};
use crate::llm::{Completion, CompletionProvider, CompletionRequest, OpenAiCompletions};
use crate::prompt::{ActionKind, TopicType, render_prompt};

pub const DEFAULT_MODEL: &str = "text-davinci-003";
pub const DEFAULT_MAX_TOKENS: u32 = 550;
pub const DEFAULT_TEMPERATURE: f64 = 1.0;

/// `null` and missing both decode as the empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Inbound request as sent by clients
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topic_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prompt_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl PromptRequest {
    pub fn new(
        topic_type: impl Into<String>,
        prompt_type: impl Into<String>,
        question: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            topic_type: topic_type.into(),
            prompt_type: prompt_type.into(),
            question: question.into(),
            content: content.into(),
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn temperature(&self) -> f64 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Model settings applied to every provider call
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub model: String,
    pub max_tokens: u32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Validates requests and forwards them to the completion provider.
///
/// Holds no per-request state; one instance is shared by all handlers.
pub struct CompletionGateway {
    config: GatewayConfig,
    provider: Option<Arc<dyn CompletionProvider>>,
}

impl CompletionGateway {
    pub fn new(config: GatewayConfig, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            config,
            provider: Some(provider),
        }
    }

    /// Gateway without a credential; every request fails with `NotConfigured`
    pub fn unconfigured(config: GatewayConfig) -> Self {
        Self {
            config,
            provider: None,
        }
    }

    /// Wire up the OpenAI provider if a credential is present
    pub fn from_config(config: &AppConfig) -> Self {
        match &config.openai_api_key {
            Some(api_key) => {
                let provider = OpenAiCompletions::new(api_key.clone(), config.openai_base_url.clone());
                info!(
                    "Completion provider ready: {} (model={})",
                    provider.name(),
                    config.model
                );
                Self::new(config.gateway_config(), Arc::new(provider))
            }
            None => Self::unconfigured(config.gateway_config()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Check the request and build the provider call, without sending it
    pub fn prepare(&self, request: &PromptRequest) -> Result<CompletionRequest, ValidationError> {
        if is_blank(&request.question) || is_blank(&request.topic_type) || is_blank(&request.prompt_type) {
            return Err(ValidationError::InvalidArgs);
        }

        let action = request
            .prompt_type
            .parse::<ActionKind>()
            .map_err(|_| ValidationError::InvalidPrompt)?;
        let topic = TopicType::from_label(&request.topic_type);

        let prompt = render_prompt(topic, action, &request.question, &request.content);
        if is_blank(&prompt) {
            return Err(ValidationError::InvalidPrompt);
        }

        Ok(CompletionRequest {
            model: self.config.model.clone(),
            prompt,
            temperature: request.temperature(),
            max_tokens: self.config.max_tokens,
        })
    }

    /// Run one request end to end. The returned text is untrimmed.
    pub async fn complete(&self, request: &PromptRequest) -> Result<Completion, GatewayError> {
        let provider = self.provider.as_ref().ok_or(GatewayError::NotConfigured)?;
        let completion_request = self.prepare(request)?;

        debug!(
            topic = %request.topic_type,
            action = %request.prompt_type,
            "Built prompt:\n{}",
            completion_request.prompt
        );

        provider.complete(completion_request).await.map_err(|e| {
            error!("Error with {} completion request: {}", provider.name(), e);
            GatewayError::from(e)
        })
    }
}
