// src/config/mod.rs
// Environment-driven configuration, loaded once at startup and passed down explicitly

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::llm::provider::openai::DEFAULT_BASE_URL;
use crate::services::completion::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, GatewayConfig};

#[derive(Clone)]
pub struct AppConfig {
    // ── Completion provider
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,
    pub max_tokens: u32,

    // ── Server
    pub host: String,
    pub port: u16,

    // ── Logging
    pub log_level: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("openai_base_url", &self.openai_base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .finish()
    }
}

/// Trimmed, non-empty value for `key`
fn lookup_value<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse `key` if set, otherwise fall back to `default`.
/// A value that is set but does not parse is an error, not a silent default.
fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup_value(lookup, key) {
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

impl AppConfig {
    /// Load `.env` (if any) and read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            openai_api_key: lookup_value(&lookup, "OPENAI_API_KEY"),
            openai_base_url: parse_or(&lookup, "OPENAI_BASE_URL", DEFAULT_BASE_URL.to_string())?,
            model: parse_or(&lookup, "COMPLETION_MODEL", DEFAULT_MODEL.to_string())?,
            max_tokens: parse_or(&lookup, "COMPLETION_MAX_TOKENS", DEFAULT_MAX_TOKENS)?,
            host: parse_or(&lookup, "HOST", "0.0.0.0".to_string())?,
            port: parse_or(&lookup, "PORT", 3000)?,
            log_level: parse_or(&lookup, "LOG_LEVEL", "info".to_string())?,
        })
    }

    pub fn provider_configured(&self) -> bool {
        self.openai_api_key.is_some()
    }

    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed log level, INFO if unrecognized
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
