use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SnipError};

/// ComposedPrompt - a saved template together with its rendered form
///
/// The template is the user-authored text with `{{name}}` references; the
/// rendered content and the used-snippet list are captured at save time so
/// the composition survives later edits to the referenced snippets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedPrompt {
    /// Opaque identifier assigned by the store (UUID v7)
    pub id: String,

    /// Display name for the composition
    pub name: String,

    /// Template text with unresolved `{{name}}` references
    pub template: String,

    /// Fully expanded text at save time, if rendering was performed
    pub rendered_content: Option<String>,

    /// Names of every snippet used (transitively) by the last render
    pub used_snippets: Vec<String>,

    /// Timestamp when this prompt was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this prompt was last updated
    pub updated_at: DateTime<Utc>,
}

impl ComposedPrompt {
    /// Create a new ComposedPrompt with a generated UUID v7 id
    ///
    /// # Errors
    /// * `InvalidName` - If the name is empty or whitespace-only
    pub fn new(name: String, template: String) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(SnipError::InvalidName {
                reason: "Prompt name cannot be empty or whitespace-only".to_string(),
            });
        }

        let now = Utc::now();
        Ok(Self {
            id: uuid::Uuid::now_v7().to_string(),
            name,
            template,
            rendered_content: None,
            used_snippets: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Attach a render result to this prompt
    pub fn with_render(mut self, rendered: String, used_snippets: Vec<String>) -> Self {
        self.rendered_content = Some(rendered);
        self.used_snippets = used_snippets;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_prompt() {
        let prompt =
            ComposedPrompt::new("launch brief".to_string(), "Intro {{core_tone}}".to_string())
                .unwrap();

        assert_eq!(prompt.name, "launch brief");
        assert!(prompt.rendered_content.is_none());
        assert!(prompt.used_snippets.is_empty());
    }

    #[test]
    fn test_with_render() {
        let prompt = ComposedPrompt::new("p".to_string(), "{{a}}".to_string())
            .unwrap()
            .with_render("expanded".to_string(), vec!["a".to_string()]);

        assert_eq!(prompt.rendered_content.as_deref(), Some("expanded"));
        assert_eq!(prompt.used_snippets, vec!["a"]);
    }

    #[test]
    fn test_new_prompt_rejects_blank_name() {
        let result = ComposedPrompt::new(String::new(), "{{a}}".to_string());
        assert!(matches!(result, Err(SnipError::InvalidName { .. })));
    }
}
