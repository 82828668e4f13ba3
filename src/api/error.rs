// src/api/error.rs
// Centralized error handling for HTTP API responses

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::fmt;
use tracing::{error, warn};

use crate::error::{GatewayError, UPSTREAM_FAILURE_MESSAGE, UpstreamError};

/// Standard API error response.
///
/// Renders as `{"error": {"message": ...}}` unless `relayed_body` holds a
/// provider's own JSON error, which is then sent unchanged.
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
    pub relayed_body: Option<String>,
}

impl ApiError {
    /// Create a new error with a specific status code
    pub fn custom(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code,
            relayed_body: None,
        }
    }

    /// Pass a provider error response through to the caller.
    ///
    /// JSON bodies are relayed byte for byte. Anything else is wrapped in
    /// the standard envelope under the provider's status.
    pub fn relay(status: u16, body: String) -> Self {
        let status_code = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if serde_json::from_str::<Value>(&body).is_ok() {
            return Self {
                message: UPSTREAM_FAILURE_MESSAGE.to_string(),
                status_code,
                relayed_body: Some(body),
            };
        }

        let message = if body.trim().is_empty() {
            UPSTREAM_FAILURE_MESSAGE.to_string()
        } else {
            body
        };
        Self::custom(status_code, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.relayed_body {
            Some(body) => (
                self.status_code,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response(),
            None => {
                let body = json!({ "error": { "message": self.message } });
                (self.status_code, Json(body)).into_response()
            }
        }
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Upstream(UpstreamError::Status { status, body }) => Self::relay(status, body),
            other => {
                if matches!(other, GatewayError::NotConfigured) {
                    error!("Completion request rejected: provider not configured");
                }
                let info = other.info();
                let status_code = StatusCode::from_u16(info.status_code)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                Self::custom(status_code, info.message)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected request body: {}", rejection.body_text());
        Self::custom(rejection.status(), rejection.body_text())
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    async fn body_json(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_standard_envelope() {
        let (status, body) = body_json(ApiError::custom(StatusCode::BAD_REQUEST, "Invalid args")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": {"message": "Invalid args"}}));
    }

    #[tokio::test]
    async fn test_relay_json_body_verbatim() {
        let raw = r#"{"error":{"message":"rate limited","type":"requests"}}"#;
        let response = ApiError::relay(429, raw.to_string()).into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], raw.as_bytes());
    }

    #[tokio::test]
    async fn test_relay_plain_text_is_wrapped() {
        let (status, body) = body_json(ApiError::relay(502, "Bad Gateway".to_string())).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, json!({"error": {"message": "Bad Gateway"}}));

        let (status, body) = body_json(ApiError::relay(503, String::new())).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, json!({"error": {"message": UPSTREAM_FAILURE_MESSAGE}}));
    }

    #[test]
    fn test_gateway_error_conversion() {
        let error = ApiError::from(GatewayError::from(ValidationError::InvalidPrompt));
        assert_eq!(error.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(error.message, "Invalid prompt");
        assert!(error.relayed_body.is_none());

        let error = ApiError::from(GatewayError::NotConfigured);
        assert_eq!(error.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.message.contains("not configured"));

        let error = ApiError::from(GatewayError::from(UpstreamError::Malformed("x".to_string())));
        assert_eq!(error.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message, UPSTREAM_FAILURE_MESSAGE);
    }

    #[test]
    fn test_envelope_matches_error_info() {
        let errors = [
            GatewayError::NotConfigured,
            GatewayError::from(ValidationError::InvalidArgs),
            GatewayError::from(ValidationError::InvalidPrompt),
            GatewayError::from(UpstreamError::Malformed("no choices".to_string())),
        ];
        for err in errors {
            let info = err.info();
            let api = ApiError::from(err);
            assert_eq!(api.status_code.as_u16(), info.status_code);
            assert_eq!(api.message, info.message);
        }
    }
}
