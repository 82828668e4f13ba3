// src/services/mod.rs

pub mod completion;

pub use completion::{CompletionGateway, GatewayConfig, PromptRequest};
