use std::collections::HashSet;

use super::refs::extract_references;
use crate::source::SnippetSource;

/// Result of a dependency walk
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyReport {
    /// Every snippet reachable from the root, de-duplicated in discovery
    /// order (a direct reference appears before its transitive closure)
    pub dependencies: Vec<String>,
    /// Cycles and missing snippets encountered along the way
    pub errors: Vec<String>,
}

/// Compute the dependency graph of a snippet
///
/// Unlike [`super::render::render`], this walk carries an explicit
/// visited-set of names on the current path and so detects cycles eagerly:
/// re-encountering a name records a circular-dependency error and stops that
/// branch without aborting its siblings.
///
/// # Arguments
/// * `name` - Root snippet name to inspect
/// * `source` - Snippet lookup capability
pub fn compute_dependencies(name: &str, source: &dyn SnippetSource) -> DependencyReport {
    walk(name, source, &HashSet::new())
}

fn walk(name: &str, source: &dyn SnippetSource, visited: &HashSet<String>) -> DependencyReport {
    if visited.contains(name) {
        return DependencyReport {
            dependencies: Vec::new(),
            errors: vec![format!("Circular dependency detected: {name}")],
        };
    }

    // Each branch walks with its own copy so sibling branches may legally
    // revisit names that only appeared on another path
    let mut visited = visited.clone();
    visited.insert(name.to_string());

    let mut dependencies = Vec::new();
    let mut errors = Vec::new();

    match source.fetch(name) {
        Ok(Some(snippet)) => {
            for reference in extract_references(&snippet.content) {
                dependencies.push(reference.clone());
                let nested = walk(&reference, source, &visited);
                dependencies.extend(nested.dependencies);
                errors.extend(nested.errors);
            }
        }
        Ok(None) => {
            errors.push(format!("Snippet not found: {name}"));
        }
        Err(e) => {
            errors.push(format!("Error loading snippet {name}: {e}"));
        }
    }

    DependencyReport {
        dependencies: dedupe(dependencies),
        errors,
    }
}

fn dedupe(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
