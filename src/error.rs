// src/error.rs
// Error types for the completion gateway

use thiserror::Error;

/// Message returned when the provider credential is missing
pub const NOT_CONFIGURED_MESSAGE: &str =
    "OpenAI API key not configured, please follow instructions in README.md";

/// Message returned when the provider call fails without a relayable response
pub const UPSTREAM_FAILURE_MESSAGE: &str = "An error occurred during your request.";

/// Rejected request input
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// `question`, `topicType` or `promptType` is blank
    #[error("Invalid args")]
    InvalidArgs,

    /// The action produced no prompt
    #[error("Invalid prompt")]
    InvalidPrompt,
}

/// Failure talking to the completion provider
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Provider answered with a non-success status; body kept as received
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request to completion provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// Everything a gateway call can fail with
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{}", NOT_CONFIGURED_MESSAGE)]
    NotConfigured,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Normalized `{message, statusCode}` view of a failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message: String,
    pub status_code: u16,
}

impl GatewayError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotConfigured => 500,
            Self::Validation(_) => 400,
            Self::Upstream(UpstreamError::Status { status, .. }) => *status,
            Self::Upstream(_) => 500,
        }
    }

    /// Caller-facing message. Provider details stay out of it; a relayed
    /// provider body carries its own.
    pub fn message(&self) -> String {
        match self {
            Self::NotConfigured => NOT_CONFIGURED_MESSAGE.to_string(),
            Self::Validation(e) => e.to_string(),
            Self::Upstream(_) => UPSTREAM_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn info(&self) -> ErrorInfo {
        ErrorInfo {
            message: self.message(),
            status_code: self.status_code(),
        }
    }
}

/// Configuration values that are present but unusable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: String, value: String },
}
