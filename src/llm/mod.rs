// src/llm/mod.rs
// LLM provider layer

pub mod provider;

pub use provider::{Completion, CompletionProvider, CompletionRequest, OpenAiCompletions};
