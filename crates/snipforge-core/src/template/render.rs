use std::collections::HashSet;

use regex::Regex;

use super::refs::extract_references;
use crate::model::Snippet;
use crate::source::SnippetSource;

/// Default recursion ceiling for [`render`]
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Result of rendering a template
///
/// Rendering is best-effort: resolution problems are reported in `errors`
/// while the output carries whatever could be expanded. Callers decide
/// whether any errors should fail the whole operation.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    /// Template with every resolvable reference substituted
    pub rendered: String,
    /// Names of every snippet used, transitively, de-duplicated in
    /// first-use order (nested names surface before the referencing name)
    pub used_snippets: Vec<String>,
    /// Resolution problems: missing snippets, lookup failures, depth ceiling
    pub errors: Vec<String>,
}

/// Render a template by replacing all snippet references with their content
///
/// Nested references inside snippet content are resolved recursively at
/// `depth + 1`. The depth ceiling is the sole termination guard: a
/// self-referential snippet graph is truncated once `max_depth` frames are
/// spent, not detected eagerly (the dependency walk in
/// [`super::deps::compute_dependencies`] is the cycle-aware inspection).
///
/// # Arguments
/// * `template` - Text containing zero or more `{{name}}` references
/// * `source` - Snippet lookup capability
/// * `max_depth` - Recursion ceiling; [`DEFAULT_MAX_DEPTH`] for callers
///   without an opinion
pub fn render(template: &str, source: &dyn SnippetSource, max_depth: u32) -> RenderOutcome {
    render_at_depth(template, source, max_depth, 0)
}

fn render_at_depth(
    template: &str,
    source: &dyn SnippetSource,
    max_depth: u32,
    depth: u32,
) -> RenderOutcome {
    if depth >= max_depth {
        return RenderOutcome {
            rendered: template.to_string(),
            used_snippets: Vec::new(),
            errors: vec!["Maximum nesting depth reached".to_string()],
        };
    }

    let names = extract_references(template);
    let mut used_snippets = Vec::new();
    let mut errors = Vec::new();
    let mut rendered = template.to_string();

    for name in names {
        match source.fetch(&name) {
            Ok(Some(snippet)) => {
                // Expand the snippet's own references first, then substitute
                // the fully expanded text for every occurrence at this level
                let substitution = if extract_references(&snippet.content).is_empty() {
                    snippet.content
                } else {
                    let nested = render_at_depth(&snippet.content, source, max_depth, depth + 1);
                    used_snippets.extend(nested.used_snippets);
                    errors.extend(nested.errors);
                    nested.rendered
                };

                rendered = replace_reference(&rendered, &name, &substitution);
                used_snippets.push(name);
            }
            Ok(None) => {
                errors.push(format!("Snippet not found: {name}"));
            }
            Err(e) => {
                tracing::warn!(snippet = %name, error = %e, "snippet lookup failed during render");
                errors.push(format!("Error loading snippet {name}: {e}"));
            }
        }
    }

    RenderOutcome {
        rendered,
        used_snippets: dedupe(used_snippets),
        errors,
    }
}

/// Get a preview of the template with known snippets partially expanded
///
/// Single substitution pass, no recursion, no lookups: each supplied
/// snippet's reference is replaced with its content truncated to 50
/// characters in brackets. Useful for showing a draft without resolving
/// the full graph.
pub fn preview(template: &str, snippets: &[Snippet]) -> String {
    let mut preview = template.to_string();

    for snippet in snippets {
        let display = if snippet.content.chars().count() > 50 {
            let truncated: String = snippet.content.chars().take(50).collect();
            format!("[{truncated}...]")
        } else {
            format!("[{}]", snippet.content)
        };
        preview = replace_reference(&preview, &snippet.name, &display);
    }

    preview
}

/// Replace every `{{ name }}` occurrence (whitespace-tolerant) with `substitution`
///
/// `NoExpand` keeps the substitution literal; snippet content is allowed to
/// contain `$`.
fn replace_reference(text: &str, name: &str, substitution: &str) -> String {
    let pattern = format!(r"\{{\{{\s*{}\s*\}}\}}", regex::escape(name));
    let re = Regex::new(&pattern).expect("escaped reference name produces a valid pattern");
    re.replace_all(text, regex::NoExpand(substitution)).into_owned()
}

/// De-duplicate preserving first occurrence order
fn dedupe(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
