use std::collections::HashMap;

use crate::errors::Result;
use crate::model::Snippet;

/// Lookup capability consumed by the template engine
///
/// The single seam between the kernel and its environment. `Ok(None)` means
/// the snippet does not exist; `Err(_)` means the lookup channel itself
/// failed (the renderer reports the two differently). Implementations live
/// in the store crate (SQLite) and here (in-memory, for tests and seeds).
pub trait SnippetSource {
    /// Fetch a snippet by exact, case-sensitive name
    fn fetch(&self, name: &str) -> Result<Option<Snippet>>;
}

/// In-memory snippet source
///
/// HashMap-backed, single-threaded. Used by tests, the CLI seed path, and
/// anywhere a fake lookup is preferable to a database.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    snippets: HashMap<String, Snippet>,
}

impl MemorySource {
    /// Create a new empty source
    pub fn new() -> Self {
        Self {
            snippets: HashMap::new(),
        }
    }

    /// Insert a snippet, replacing any previous entry with the same name
    pub fn insert(&mut self, snippet: Snippet) {
        self.snippets.insert(snippet.name.clone(), snippet);
    }

    /// Number of stored snippets
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    /// Whether the source holds no snippets
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Iterate over stored snippets in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Snippet> {
        self.snippets.values()
    }
}

impl SnippetSource for MemorySource {
    fn fetch(&self, name: &str) -> Result<Option<Snippet>> {
        Ok(self.snippets.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(name: &str, content: &str) -> Snippet {
        Snippet::new(name.to_string(), content.to_string(), None).unwrap()
    }

    #[test]
    fn test_fetch_present_and_absent() {
        let mut source = MemorySource::new();
        source.insert(snippet("geo_asia", "Asia context"));

        let found = source.fetch("geo_asia").unwrap();
        assert_eq!(found.unwrap().content, "Asia context");

        let missing = source.fetch("geo_europe").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut source = MemorySource::new();
        source.insert(snippet("geo", "one"));
        source.insert(snippet("geo", "two"));

        assert_eq!(source.len(), 1);
        assert_eq!(source.fetch("geo").unwrap().unwrap().content, "two");
    }
}
