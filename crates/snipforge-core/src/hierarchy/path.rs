//! Hierarchical name parsing and ancestor utilities
//!
//! Snippet names are underscore-delimited paths ordered root-to-leaf:
//! `geo_asia_japan` -> `[geo, asia, japan]`.

/// Parse a snippet name into its hierarchical segments
///
/// Empty segments are dropped, which defends against leading, trailing and
/// doubled underscores.
pub fn parse_hierarchy(name: &str) -> Vec<String> {
    name.split('_')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Get the hierarchical path display
///
/// e.g. `"geo_asia_japan"` -> `"geo > asia > japan"`
pub fn hierarchy_display(name: &str) -> String {
    parse_hierarchy(name).join(" > ")
}

/// Get the parent path of a snippet name
///
/// e.g. `"geo_asia_japan"` -> `Some("geo_asia")`; single-segment and empty
/// names have no parent.
pub fn parent_path(name: &str) -> Option<String> {
    let segments = parse_hierarchy(name);
    if segments.len() <= 1 {
        return None;
    }
    Some(segments[..segments.len() - 1].join("_"))
}

/// Get all ancestor paths, nearest the root first
///
/// e.g. `"geo_asia_japan"` -> `["geo", "geo_asia"]`
pub fn ancestor_paths(name: &str) -> Vec<String> {
    let segments = parse_hierarchy(name);
    (1..segments.len())
        .map(|depth| segments[..depth].join("_"))
        .collect()
}

/// Check whether one snippet name is an ancestor of another
///
/// Holds iff the ancestor's segments form a strict, non-empty proper prefix
/// of the descendant's segments.
pub fn is_ancestor(ancestor_name: &str, descendant_name: &str) -> bool {
    let ancestor = parse_hierarchy(ancestor_name);
    let descendant = parse_hierarchy(descendant_name);

    if ancestor.is_empty() || ancestor.len() >= descendant.len() {
        return false;
    }

    ancestor.iter().zip(descendant.iter()).all(|(a, d)| a == d)
}
