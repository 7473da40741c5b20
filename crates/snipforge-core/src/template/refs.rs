use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

static REF_RE: OnceLock<Regex> = OnceLock::new();
static EMPTY_REF_RE: OnceLock<Regex> = OnceLock::new();
static NESTED_RE: OnceLock<Regex> = OnceLock::new();

/// Pattern for a reference token: `{{` + any run of non-`}` chars + `}}`
fn ref_re() -> &'static Regex {
    REF_RE.get_or_init(|| Regex::new(r"\{\{([^}]+)\}\}").expect("reference pattern is valid"))
}

fn empty_ref_re() -> &'static Regex {
    EMPTY_REF_RE.get_or_init(|| Regex::new(r"\{\{\s*\}\}").expect("empty-ref pattern is valid"))
}

fn nested_re() -> &'static Regex {
    NESTED_RE.get_or_init(|| Regex::new(r"\{\{[^}]*\{\{").expect("nested pattern is valid"))
}

/// Extract all snippet references from a template
///
/// e.g. `"Hello {{world}} and {{ universe }}"` -> `["world", "universe"]`.
/// Captured identifiers are trimmed and de-duplicated preserving first
/// occurrence order. A whitespace-only capture trims to the empty string and
/// is retained; [`validate`] is the layer that rejects empty references.
pub fn extract_references(template: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut references = Vec::new();

    for capture in ref_re().captures_iter(template) {
        let name = capture[1].trim().to_string();
        if seen.insert(name.clone()) {
            references.push(name);
        }
    }

    references
}

/// Result of template syntax validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// True iff no violations were collected
    pub valid: bool,
    /// Human-readable violation messages, one per failed check
    pub errors: Vec<String>,
}

/// Validate a template for syntax errors
///
/// Runs three independent checks and collects every violation (no
/// short-circuiting):
/// 1. bracket balance: the number of `{{` equals the number of `}}`
/// 2. no reference whose identifier is empty after trimming
/// 3. no `{{` opened before the previous one is closed
pub fn validate(template: &str) -> ValidationReport {
    let mut errors = Vec::new();

    let open_count = template.matches("{{").count();
    let close_count = template.matches("}}").count();
    if open_count != close_count {
        errors.push("Mismatched brackets: ensure all {{ are closed with }}".to_string());
    }

    if empty_ref_re().is_match(template) {
        errors.push("Empty snippet references found".to_string());
    }

    if nested_re().is_match(template) {
        errors.push("Nested brackets are not supported".to_string());
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}
