//! Snipforge LLM - OpenRouter chat-completion orchestration
//!
//! Provides:
//! - A thin OpenRouter client (bearer auth, attribution headers)
//! - Generation and combiner prompt builders
//! - The multi-model generation flow: fan out to the generator roster,
//!   capture per-model failures, combine with a final model

pub mod chat;
pub mod client;
pub mod config;
pub mod errors;
pub mod generate;
pub mod prompts;

// Re-export commonly used types
pub use chat::{ChatMessage, ChatRequest, ChatResponse};
pub use client::OpenRouterClient;
pub use config::{ApiKey, LlmConfig, ModelRoster, ModelSpec};
pub use errors::{LlmError, Result};
pub use generate::{generate_snippet, GenerationOutcome, GenerationRequest, ModelResponse};
