// src/api/http/router.rs
// HTTP router composition

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::{
    handlers::{actions_handler, health_handler},
    prompt::prompt_handler,
};
use crate::state::AppState;

/// Full application router: `/health` at the root, the rest under `/api`
pub fn http_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_router = Router::new()
        .route("/prompt", post(prompt_handler))
        .route("/actions", get(actions_handler));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
