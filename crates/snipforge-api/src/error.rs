use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use snipforge_core::SnipError;
use thiserror::Error;

/// Result type alias using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error taxonomy for the HTTP surface
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request is malformed (missing fields, bad parameters)
    #[error("{0}")]
    BadRequest(String),

    /// Request is syntactically fine but rejected by a policy, with the
    /// collected reasons (template validation, render failure)
    #[error("{message}")]
    Rejected { message: String, errors: Vec<String> },

    /// Requested entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Name conflict on create
    #[error("{0}")]
    Conflict(String),

    /// Generation requested but no LLM is configured
    #[error("LLM generation is not configured")]
    LlmUnavailable,

    /// Upstream LLM failure
    #[error("Generation failed: {0}")]
    Llm(#[from] snipforge_llm::LlmError),

    /// Store or kernel failure
    #[error("{0}")]
    Core(#[from] SnipError),

    /// Server configuration problem
    #[error("Configuration error: {0}")]
    Config(String),

    /// Socket-level failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Rejected { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::LlmUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Llm(_) => StatusCode::BAD_GATEWAY,
            ApiError::Core(SnipError::NotFound { .. })
            | ApiError::Core(SnipError::PromptNotFound { .. })
            | ApiError::Core(SnipError::SessionNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Core(SnipError::AlreadyExists { .. }) => StatusCode::CONFLICT,
            ApiError::Core(SnipError::InvalidName { .. })
            | ApiError::Core(SnipError::InvalidContent { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Core(_) | ApiError::Config(_) | ApiError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = match &self {
            ApiError::Rejected { message, errors } => serde_json::json!({
                "error": message,
                "errors": errors,
            }),
            other => serde_json::json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::Conflict("x".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::LlmUnavailable.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_core_not_found_maps_to_404() {
        let err = ApiError::Core(SnipError::NotFound { name: "x".into() });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_core_duplicate_maps_to_409() {
        let err = ApiError::Core(SnipError::AlreadyExists { name: "x".into() });
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }
}
