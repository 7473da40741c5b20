//! End-to-end: template engine driving the SQLite-backed snippet source

use snipforge_core::template::{compute_dependencies, render, DEFAULT_MAX_DEPTH};
use snipforge_core::Snippet;
use snipforge_store::repo::SnippetRepo;
use snipforge_store::StoreHandle;

fn seeded_handle(entries: &[(&str, &str)]) -> StoreHandle {
    let handle = StoreHandle::open_in_memory().unwrap();
    {
        let conn = handle.conn().unwrap();
        for (name, content) in entries {
            let snippet =
                Snippet::new(name.to_string(), content.to_string(), None).unwrap();
            SnippetRepo::create(&conn, &snippet).unwrap();
        }
    }
    handle
}

#[test]
fn test_render_resolves_nested_references_from_sqlite() {
    let handle = seeded_handle(&[
        ("report", "{{intro}} then findings"),
        ("intro", "Hello from {{geo_asia_japan}}"),
        ("geo_asia_japan", "Japan"),
    ]);

    let outcome = render("{{report}}", &handle, DEFAULT_MAX_DEPTH);

    assert_eq!(outcome.rendered, "Hello from Japan then findings");
    assert_eq!(
        outcome.used_snippets,
        vec!["geo_asia_japan", "intro", "report"]
    );
    assert!(outcome.errors.is_empty());
}

#[test]
fn test_render_reports_missing_rows_as_not_found() {
    let handle = seeded_handle(&[]);

    let outcome = render("{{ghost}}", &handle, DEFAULT_MAX_DEPTH);

    assert_eq!(outcome.rendered, "{{ghost}}");
    assert_eq!(outcome.errors, vec!["Snippet not found: ghost"]);
}

#[test]
fn test_dependency_walk_against_sqlite() {
    let handle = seeded_handle(&[("a", "{{b}}"), ("b", "{{a}}")]);

    let report = compute_dependencies("a", &handle);

    assert!(report
        .errors
        .iter()
        .any(|e| e.contains("Circular dependency detected")));
}
