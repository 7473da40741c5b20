use thiserror::Error;

/// Result type alias using LlmError
pub type Result<T> = std::result::Result<T, LlmError>;

/// Error taxonomy for LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// OPENROUTER_API_KEY is not configured
    #[error("OPENROUTER_API_KEY is not configured")]
    MissingApiKey,

    /// The API answered with a non-success status
    #[error("OpenRouter API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// The API answered 2xx but with no choices
    #[error("No response from OpenRouter")]
    EmptyResponse,

    /// Transport-level failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}
