use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SnipError};

/// Snippet - the fundamental unit of reusable prompt text
///
/// A Snippet is identified by its hierarchical, underscore-delimited name
/// (e.g. `geo_asia_japan`). Its content may itself contain `{{name}}`
/// references to other snippets, which the template engine resolves
/// recursively. The store assigns an opaque id; the kernel addresses
/// snippets by name only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    /// Opaque identifier assigned by the store (UUID v7)
    pub id: String,

    /// Unique hierarchical name, underscore-delimited
    pub name: String,

    /// Text body; may contain `{{other_name}}` references
    pub content: String,

    /// Optional human-readable description
    pub description: Option<String>,

    /// Timestamp when this Snippet was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this Snippet was last updated
    pub updated_at: DateTime<Utc>,
}

impl Snippet {
    /// Create a new Snippet with a generated UUID v7 id
    ///
    /// # Errors
    /// * `InvalidName` - If the name is empty or whitespace-only
    /// * `InvalidContent` - If the content is empty
    pub fn new(name: String, content: String, description: Option<String>) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(SnipError::InvalidName {
                reason: "Name cannot be empty or whitespace-only".to_string(),
            });
        }
        if content.is_empty() {
            return Err(SnipError::InvalidContent {
                reason: "Content cannot be empty".to_string(),
            });
        }

        let now = Utc::now();
        Ok(Self {
            id: uuid::Uuid::now_v7().to_string(),
            name,
            content,
            description,
            created_at: now,
            updated_at: now,
        })
    }

    /// Touch the updated_at timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snippet() {
        let snippet = Snippet::new(
            "geo_asia_japan".to_string(),
            "Japan market context".to_string(),
            None,
        )
        .unwrap();

        assert_eq!(snippet.name, "geo_asia_japan");
        assert_eq!(snippet.content, "Japan market context");
        assert!(snippet.description.is_none());
        assert!(!snippet.id.is_empty());
    }

    #[test]
    fn test_new_snippet_rejects_blank_name() {
        let result = Snippet::new("   ".to_string(), "content".to_string(), None);
        assert!(matches!(result, Err(SnipError::InvalidName { .. })));
    }

    #[test]
    fn test_new_snippet_rejects_empty_content() {
        let result = Snippet::new("geo".to_string(), String::new(), None);
        assert!(matches!(result, Err(SnipError::InvalidContent { .. })));
    }
}
