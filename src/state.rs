// src/state.rs
// Shared, read-only application state handed to every handler

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::CompletionGateway;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<CompletionGateway>,
}

impl AppState {
    pub fn new(gateway: CompletionGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(CompletionGateway::from_config(config))
    }
}
