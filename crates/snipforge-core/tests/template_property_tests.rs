//! Property-based tests for the template engine
//!
//! The engine consumes arbitrary user text, so the scanners must never
//! panic and the identity properties must hold for any reference-free
//! input.

use proptest::prelude::*;
use snipforge_core::template::{extract_references, render, validate, DEFAULT_MAX_DEPTH};
use snipforge_core::MemorySource;

proptest! {
    #[test]
    fn extract_never_panics(template in ".*") {
        let _ = extract_references(&template);
    }

    #[test]
    fn validate_never_panics(template in ".*") {
        let _ = validate(&template);
    }

    #[test]
    fn reference_free_templates_render_to_themselves(template in "[^{}]*") {
        let source = MemorySource::new();
        let outcome = render(&template, &source, DEFAULT_MAX_DEPTH);

        prop_assert_eq!(outcome.rendered, template);
        prop_assert!(outcome.used_snippets.is_empty());
        prop_assert!(outcome.errors.is_empty());
    }

    #[test]
    fn extraction_is_deduplicated(template in ".*") {
        let refs = extract_references(&template);
        let mut unique = refs.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(refs.len(), unique.len());
    }

    #[test]
    fn validity_flag_matches_error_list(template in "[a-z {}]*") {
        let report = validate(&template);
        prop_assert_eq!(report.valid, report.errors.is_empty());
    }
}
