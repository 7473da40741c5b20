use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a generation session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
    Cancelled,
}

impl SessionStatus {
    /// Stable string form used by the store and the API
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::InProgress => "in_progress",
            SessionStatus::Completed => "completed",
            SessionStatus::Cancelled => "cancelled",
        }
    }

    /// Parse the stable string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "in_progress" => Some(SessionStatus::InProgress),
            "completed" => Some(SessionStatus::Completed),
            "cancelled" => Some(SessionStatus::Cancelled),
            _ => None,
        }
    }
}

/// GenerationSession - one multi-LLM snippet generation run
///
/// Records the user's context, the similar snippets surfaced as reference
/// material, every model's raw response, and the combined final content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSession {
    /// Opaque identifier assigned by the store (UUID v7)
    pub id: String,

    /// Name of the snippet being generated
    pub snippet_name: String,

    /// Free-form user context / requirements
    pub user_context: String,

    /// Names of the similar snippets offered as reference material
    pub similar_snippets: Vec<String>,

    /// Raw response per model display name (in roster order)
    pub llm_responses: BTreeMap<String, String>,

    /// Combined final content, once the combiner has run
    pub final_combined: Option<String>,

    /// Lifecycle state
    pub status: SessionStatus,

    /// Timestamp when this session was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this session was last updated
    pub updated_at: DateTime<Utc>,
}

impl GenerationSession {
    /// Create a new in-progress session with a generated UUID v7 id
    pub fn new(snippet_name: String, user_context: String, similar_snippets: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            snippet_name,
            user_context,
            similar_snippets,
            llm_responses: BTreeMap::new(),
            final_combined: None,
            status: SessionStatus::InProgress,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record the generation result and mark the session completed
    pub fn complete(&mut self, responses: BTreeMap<String, String>, final_combined: String) {
        self.llm_responses = responses;
        self.final_combined = Some(final_combined);
        self.status = SessionStatus::Completed;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_in_progress() {
        let session = GenerationSession::new(
            "geo_asia_korea".to_string(),
            "expand into Korea".to_string(),
            vec!["geo_asia_japan".to_string()],
        );

        assert_eq!(session.status, SessionStatus::InProgress);
        assert!(session.final_combined.is_none());
        assert!(session.llm_responses.is_empty());
    }

    #[test]
    fn test_complete_records_results() {
        let mut session =
            GenerationSession::new("geo".to_string(), "ctx".to_string(), Vec::new());

        let mut responses = BTreeMap::new();
        responses.insert("Claude 4 Opus".to_string(), "version a".to_string());
        session.complete(responses, "final".to_string());

        assert_eq!(session.status, SessionStatus::Completed);
        assert_eq!(session.final_combined.as_deref(), Some("final"));
        assert_eq!(session.llm_responses.len(), 1);
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            SessionStatus::InProgress,
            SessionStatus::Completed,
            SessionStatus::Cancelled,
        ] {
            assert_eq!(SessionStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(SessionStatus::parse("bogus"), None);
    }
}
