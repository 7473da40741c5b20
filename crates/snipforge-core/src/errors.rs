use thiserror::Error;

/// Result type alias using SnipError
pub type Result<T> = std::result::Result<T, SnipError>;

/// Error taxonomy for Snipforge operations
///
/// Expected domain conditions of the template engine (missing snippet,
/// malformed template, depth ceiling, cycle) are NOT errors - they are
/// reported as string lists inside [`crate::template::RenderOutcome`] and
/// friends so that rendering stays best-effort. This enum covers the
/// collaborator-level failures: the lookup channel itself, persistence,
/// serialization.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnipError {
    /// Snippet lookup channel failed (distinct from the snippet not existing)
    #[error("Snippet lookup failed for {name}: {message}")]
    LookupFailed { name: String, message: String },

    /// Snippet name is invalid (empty or whitespace-only)
    #[error("Invalid snippet name: {reason}")]
    InvalidName { reason: String },

    /// Snippet content is invalid (empty)
    #[error("Invalid snippet content: {reason}")]
    InvalidContent { reason: String },

    /// A snippet with this name already exists
    #[error("Snippet already exists: {name}")]
    AlreadyExists { name: String },

    /// Snippet not found where its existence is a hard requirement
    /// (repository reads; the renderer reports absence as data instead)
    #[error("Snippet not found: {name}")]
    NotFound { name: String },

    /// Composed prompt not found in the store
    #[error("Prompt not found: {prompt_id}")]
    PromptNotFound { prompt_id: String },

    /// Generation session not found in the store
    #[error("Generation session not found: {session_id}")]
    SessionNotFound { session_id: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Persistence error (database open/query/migration)
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}
