mod common;

use common::make_snippet;
use snipforge_core::hierarchy::{
    find_similar, group_by_top_level, hierarchy_display, is_ancestor, parse_hierarchy, similarity,
    DEFAULT_SIMILAR_LIMIT,
};

#[test]
fn test_parse_hierarchy_underscore_segments() {
    assert_eq!(
        parse_hierarchy("geo_asia_japan"),
        vec!["geo", "asia", "japan"]
    );
}

#[test]
fn test_self_similarity_is_zero() {
    assert_eq!(similarity("geo_asia_japan", "geo_asia_japan").score, 0);
}

#[test]
fn test_sibling_score_is_117() {
    // (2/3)*100 + (1 - 0/3)*20 + 30 = 116.67 -> 117
    let result = similarity("geo_asia_japan", "geo_asia_china");
    assert_eq!(result.score, 117);
    assert_eq!(result.shared_path, vec!["geo", "asia"]);
}

#[test]
fn test_disjoint_roots_are_unrelated() {
    let result = similarity("geo_asia_japan", "industry_tech_saas");
    assert_eq!(result.score, 0);

    let candidates = vec![make_snippet("industry_tech_saas", "c")];
    let results = find_similar("geo_asia_japan", &candidates, DEFAULT_SIMILAR_LIMIT);
    assert!(results.is_empty());
}

#[test]
fn test_gap_segments_do_not_count() {
    // shared prefix stops at the first mismatch even though "japan"
    // appears later in both names
    let result = similarity("geo_asia_japan", "geo_europe_japan");
    assert_eq!(result.shared_path, vec!["geo"]);
}

#[test]
fn test_find_similar_ranks_siblings_above_cousins() {
    let candidates = vec![
        make_snippet("geo_europe_uk", "c"),
        make_snippet("geo_asia_china", "c"),
        make_snippet("geo_asia", "c"),
        make_snippet("industry_tech", "c"),
    ];

    let results = find_similar("geo_asia_japan", &candidates, DEFAULT_SIMILAR_LIMIT);

    assert_eq!(results[0].snippet.name, "geo_asia_china");
    assert!(results
        .iter()
        .all(|r| r.snippet.name != "industry_tech"));
}

#[test]
fn test_group_by_top_level_buckets_by_first_segment() {
    let snippets = vec![
        make_snippet("geo_asia_japan", "c"),
        make_snippet("geo_europe_uk", "c"),
        make_snippet("industry_tech", "c"),
    ];

    let groups = group_by_top_level(&snippets);

    let geo: Vec<&str> = groups["geo"].iter().map(|s| s.name.as_str()).collect();
    assert_eq!(geo, vec!["geo_asia_japan", "geo_europe_uk"]);
    assert_eq!(groups["industry"].len(), 1);
}

#[test]
fn test_display_and_ancestry_round_out_the_model() {
    assert_eq!(hierarchy_display("geo_asia_japan"), "geo > asia > japan");
    assert!(is_ancestor("geo_asia", "geo_asia_japan"));
    assert!(!is_ancestor("geo_asia_japan", "geo_asia"));
}
