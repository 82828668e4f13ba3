// src/api/http/mod.rs

pub mod handlers;
pub mod prompt;
pub mod router;

pub use handlers::{ActionCatalog, ActionDescriptor, actions_handler, health_handler};
pub use prompt::{PromptResponse, prompt_handler};
pub use router::http_router;
