use std::collections::BTreeMap;

use super::path::parse_hierarchy;
use crate::model::Snippet;

/// Sentinel group for names that parse to zero segments
pub const UNCATEGORIZED: &str = "uncategorized";

/// Group snippets by their top-level hierarchy segment
///
/// Input order is preserved within each group; group keys iterate in sorted
/// order. Names with no segments (empty or all-underscore) land under
/// [`UNCATEGORIZED`].
pub fn group_by_top_level(snippets: &[Snippet]) -> BTreeMap<String, Vec<Snippet>> {
    let mut groups: BTreeMap<String, Vec<Snippet>> = BTreeMap::new();

    for snippet in snippets {
        let top_level = parse_hierarchy(&snippet.name)
            .into_iter()
            .next()
            .unwrap_or_else(|| UNCATEGORIZED.to_string());

        groups.entry(top_level).or_default().push(snippet.clone());
    }

    groups
}
