// src/prompt/mod.rs
// Prompt building: topic personas, action templates, rendering

pub mod action;
pub mod builder;
pub mod template;
pub mod topic;

pub use action::{ActionFamily, ActionKind, UnknownAction};
pub use builder::{build_prompt, preview_prompt, render_prompt};
pub use template::{Placeholder, PromptVars, Template};
pub use topic::TopicType;
