// src/lib.rs

pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod services;
pub mod state;
