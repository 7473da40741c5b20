//! OpenRouter client
//!
//! Thin wrapper over reqwest for the chat-completions endpoint. Retries and
//! rate limiting are left to the caller; a generation run treats a failed
//! model as a captured error, not a reason to abort.

use reqwest::Client as HttpClient;

use crate::chat::{ChatMessage, ChatRequest, ChatResponse};
use crate::config::LlmConfig;
use crate::errors::{LlmError, Result};

/// Request timeout; generation responses can be slow
const REQUEST_TIMEOUT_SECS: u64 = 300;

/// Client for the OpenRouter chat-completions API
pub struct OpenRouterClient {
    config: LlmConfig,
    http_client: HttpClient,
}

impl OpenRouterClient {
    /// Create a new client
    ///
    /// # Errors
    /// * `Request` - If the underlying HTTP client cannot be constructed
    pub fn new(config: LlmConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent("snipforge/0.1")
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Send a single-user-message completion and return the content
    ///
    /// # Errors
    /// * `Api` - Non-success status from OpenRouter, with the response body
    /// * `EmptyResponse` - 2xx with no choices
    /// * `Request` - Transport failure
    pub async fn complete(
        &self,
        model_id: &str,
        prompt: String,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String> {
        let request = ChatRequest::new(model_id.to_string(), vec![ChatMessage::user(prompt)])
            .with_temperature(temperature)
            .with_max_tokens(max_tokens);

        tracing::debug!(model = model_id, "sending chat completion request");

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(self.config.api_key.expose())
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.app_title)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response.json().await?;
        let choice = completion.choices.into_iter().next().ok_or(LlmError::EmptyResponse)?;

        Ok(choice.message.content)
    }

    /// Check that OpenRouter is reachable with the configured key
    pub async fn test_connection(&self) -> bool {
        let result = self
            .http_client
            .get(format!("{}/models", self.config.base_url))
            .bearer_auth(self.config.api_key.expose())
            .send()
            .await;

        match result {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!(error = %e, "OpenRouter connection test failed");
                false
            }
        }
    }
}
