//! LLM client configuration
//!
//! The API key is wrapped in a redacting newtype so a stray `{:?}` on the
//! config can never leak it into logs.

use std::fmt;

use crate::errors::{LlmError, Result};

/// Default OpenRouter endpoint
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default attribution referer when no app URL is configured
pub const DEFAULT_REFERER: &str = "http://localhost:3000";

/// OpenRouter API key that redacts itself in Debug and Display
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the underlying key for the Authorization header
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

/// One chat-completion model offered through OpenRouter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSpec {
    /// Provider-qualified model id, e.g. `anthropic/claude-4-opus`
    pub id: String,
    /// Display name used in session records and combiner prompts
    pub name: String,
    /// Provider slug
    pub provider: String,
}

impl ModelSpec {
    pub fn new(id: &str, name: &str, provider: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            provider: provider.to_string(),
        }
    }
}

/// The models used for one generation run
///
/// Generators each produce a candidate snippet; the combiner merges the
/// candidates into the final version.
#[derive(Debug, Clone)]
pub struct ModelRoster {
    pub generators: Vec<ModelSpec>,
    pub combiner: ModelSpec,
}

impl Default for ModelRoster {
    fn default() -> Self {
        Self {
            generators: vec![
                ModelSpec::new("anthropic/claude-4-opus", "Claude 4 Opus", "anthropic"),
                ModelSpec::new("openai/o3", "OpenAI o3", "openai"),
                ModelSpec::new("x-ai/grok-4", "Grok 4", "x-ai"),
            ],
            combiner: ModelSpec::new("google/gemini-2.5-pro", "Gemini 2.5 Pro", "google"),
        }
    }
}

/// Configuration for the OpenRouter client
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: ApiKey,
    pub base_url: String,
    /// Sent as HTTP-Referer for OpenRouter attribution
    pub referer: String,
    /// Sent as X-Title for OpenRouter attribution
    pub app_title: String,
}

impl LlmConfig {
    /// Build a config from a raw key with default endpoint and attribution
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            app_title: "Snipforge".to_string(),
        }
    }

    /// Read configuration from the environment
    ///
    /// `OPENROUTER_API_KEY` is required; `SNIPFORGE_APP_URL` overrides the
    /// attribution referer when present.
    ///
    /// # Errors
    /// * `MissingApiKey` - If `OPENROUTER_API_KEY` is unset or empty
    pub fn from_env() -> Result<Self> {
        let key = std::env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(LlmError::MissingApiKey)?;

        let mut config = Self::new(ApiKey::new(key));
        if let Ok(url) = std::env::var("SNIPFORGE_APP_URL") {
            if !url.is_empty() {
                config.referer = url;
            }
        }

        Ok(config)
    }
}
