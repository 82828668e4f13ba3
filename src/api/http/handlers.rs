// src/api/http/handlers.rs
// Health and action catalogue handlers

use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

use crate::prompt::{ActionFamily, ActionKind, Placeholder, TopicType};
use crate::state::AppState;

/// Health check handler
pub async fn health_handler(State(app_state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "model": app_state.gateway.config().model,
        "provider_configured": app_state.gateway.is_configured(),
    }))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDescriptor {
    pub id: ActionKind,
    pub label: &'static str,
    pub tooltip: &'static str,
    pub family: ActionFamily,
    pub requires_content: bool,
    /// Request fields the action's template reads
    pub inputs: Vec<&'static str>,
}

impl From<ActionKind> for ActionDescriptor {
    fn from(action: ActionKind) -> Self {
        Self {
            id: action,
            label: action.label(),
            tooltip: action.tooltip(),
            family: action.family(),
            requires_content: action.requires_content(),
            inputs: action
                .template()
                .placeholders()
                .iter()
                .filter(|p| matches!(**p, Placeholder::Question | Placeholder::Content))
                .map(|p| p.token())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionCatalog {
    pub topics: Vec<&'static str>,
    pub actions: Vec<ActionDescriptor>,
}

impl ActionCatalog {
    pub fn current() -> Self {
        Self {
            topics: TopicType::SELECTABLE.iter().map(|t| t.label()).collect(),
            actions: ActionKind::ALL.into_iter().map(ActionDescriptor::from).collect(),
        }
    }
}

/// Topics and actions a client can offer
pub async fn actions_handler() -> Json<ActionCatalog> {
    Json(ActionCatalog::current())
}
