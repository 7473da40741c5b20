mod common;

use common::source_with;
use snipforge_core::template::compute_dependencies;

#[test]
fn test_linear_chain_dependencies() {
    let source = source_with(&[
        ("report", "{{intro}} {{body}}"),
        ("intro", "{{tone}}"),
        ("body", "text"),
        ("tone", "crisp"),
    ]);

    let report = compute_dependencies("report", &source);

    assert_eq!(report.dependencies, vec!["intro", "tone", "body"]);
    assert!(report.errors.is_empty());
}

#[test]
fn test_two_node_cycle_reported_and_terminates() {
    let source = source_with(&[("x", "{{y}}"), ("y", "{{x}}")]);

    let report = compute_dependencies("x", &source);

    assert!(report
        .errors
        .iter()
        .any(|e| e.contains("Circular dependency detected: x")));
    // the walk still reports what it reached before closing the loop
    assert_eq!(report.dependencies, vec!["y", "x"]);
}

#[test]
fn test_cycle_in_one_branch_does_not_abort_sibling() {
    let source = source_with(&[
        ("root", "{{loop_a}} {{clean}}"),
        ("loop_a", "{{loop_b}}"),
        ("loop_b", "{{loop_a}}"),
        ("clean", "leaf"),
    ]);

    let report = compute_dependencies("root", &source);

    assert!(report
        .errors
        .iter()
        .any(|e| e.contains("Circular dependency detected: loop_a")));
    assert!(report.dependencies.contains(&"clean".to_string()));
}

#[test]
fn test_missing_snippet_reported_with_name() {
    let source = source_with(&[("root", "{{phantom}}")]);

    let report = compute_dependencies("root", &source);

    assert_eq!(report.dependencies, vec!["phantom"]);
    assert_eq!(report.errors, vec!["Snippet not found: phantom"]);
}
