mod common;

use common::{make_snippet, new_source, setup_chain, source_with};
use snipforge_core::template::{extract_references, render, DEFAULT_MAX_DEPTH};
use snipforge_core::{MemorySource, Result, Snippet, SnippetSource};

// ===== EXTRACTION =====

#[test]
fn test_extract_references_trims_and_dedupes() {
    let refs = extract_references("Hello {{world}} and {{ universe }} and {{world}}");
    assert_eq!(refs, vec!["world", "universe"]);
}

// ===== RENDER =====

#[test]
fn test_render_reference_free_template_round_trips() {
    let source = new_source();
    let outcome = render("just words, { single braces } included", &source, DEFAULT_MAX_DEPTH);

    assert_eq!(outcome.rendered, "just words, { single braces } included");
    assert!(outcome.used_snippets.is_empty());
    assert!(outcome.errors.is_empty());
}

#[test]
fn test_render_flat_expansion_is_single_pass() {
    // every reference resolves to content with zero further references,
    // so one substitution pass fully renders the template
    let source = source_with(&[("greeting", "Hello"), ("subject", "team")]);
    let outcome = render("{{greeting}}, {{subject}}!", &source, DEFAULT_MAX_DEPTH);

    assert_eq!(outcome.rendered, "Hello, team!");
    assert_eq!(outcome.used_snippets, vec!["greeting", "subject"]);
    assert!(outcome.errors.is_empty());
}

#[test]
fn test_render_missing_reference_reported_and_left_literal() {
    let source = new_source();
    let outcome = render("{{ghost}}", &source, DEFAULT_MAX_DEPTH);

    assert_eq!(outcome.rendered, "{{ghost}}");
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("ghost"));
}

#[test]
fn test_render_mixed_found_and_missing() {
    let source = source_with(&[("real", "substance")]);
    let outcome = render("{{real}} and {{ghost}}", &source, DEFAULT_MAX_DEPTH);

    assert_eq!(outcome.rendered, "substance and {{ghost}}");
    assert_eq!(outcome.used_snippets, vec!["real"]);
    assert_eq!(outcome.errors, vec!["Snippet not found: ghost"]);
}

#[test]
fn test_render_six_level_chain_hits_ceiling_at_five() {
    let mut source = new_source();
    let names = setup_chain(&mut source, 6);

    let outcome = render(&format!("{{{{{}}}}}", names[0]), &source, 5);

    assert!(outcome
        .errors
        .contains(&"Maximum nesting depth reached".to_string()));
    // the last link never resolved; its reference survives in the output
    assert!(outcome.rendered.contains(&format!("{{{{{}}}}}", names[5])));
    // shallower frames still resolved their own literal content
    assert!(outcome.rendered.contains("[0]"));
    assert!(outcome.rendered.contains("[4]"));
}

#[test]
fn test_render_deep_chain_resolves_fully_under_ceiling() {
    let mut source = new_source();
    let names = setup_chain(&mut source, 4);

    let outcome = render(&format!("{{{{{}}}}}", names[0]), &source, DEFAULT_MAX_DEPTH);

    assert!(outcome.errors.is_empty());
    assert!(outcome.rendered.ends_with("end"));
    assert_eq!(outcome.used_snippets.len(), 4);
}

// ===== TRANSIENT LOOKUP FAILURE =====

/// Source whose lookups always fail at the channel level
struct BrokenSource;

impl SnippetSource for BrokenSource {
    fn fetch(&self, name: &str) -> Result<Option<Snippet>> {
        Err(snipforge_core::SnipError::LookupFailed {
            name: name.to_string(),
            message: "database is on fire".to_string(),
        })
    }
}

#[test]
fn test_render_lookup_failure_reported_and_left_literal() {
    let outcome = render("{{anything}}", &BrokenSource, DEFAULT_MAX_DEPTH);

    assert_eq!(outcome.rendered, "{{anything}}");
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].starts_with("Error loading snippet anything:"));
    assert!(outcome.errors[0].contains("database is on fire"));
}

#[test]
fn test_render_failure_does_not_abort_remaining_references() {
    /// Fails only for one specific name
    struct FlakySource(MemorySource);

    impl SnippetSource for FlakySource {
        fn fetch(&self, name: &str) -> Result<Option<Snippet>> {
            if name == "flaky" {
                return Err(snipforge_core::SnipError::LookupFailed {
                    name: name.to_string(),
                    message: "timeout".to_string(),
                });
            }
            self.0.fetch(name)
        }
    }

    let mut inner = new_source();
    inner.insert(make_snippet("solid", "rock"));
    let source = FlakySource(inner);

    let outcome = render("{{flaky}} {{solid}}", &source, DEFAULT_MAX_DEPTH);

    assert_eq!(outcome.rendered, "{{flaky}} rock");
    assert_eq!(outcome.used_snippets, vec!["solid"]);
    assert_eq!(outcome.errors.len(), 1);
}
