use super::path::parse_hierarchy;
use crate::model::Snippet;

/// Default number of similar snippets returned by [`find_similar`]
pub const DEFAULT_SIMILAR_LIMIT: usize = 5;

/// Similarity between two snippet names
#[derive(Debug, Clone, PartialEq)]
pub struct Similarity {
    /// Rounded score; identical names score 0, sibling pairs can exceed 100
    pub score: i64,
    /// Segments of the longest common prefix, root first
    pub shared_path: Vec<String>,
}

/// A candidate snippet with its score against a target name
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarSnippet {
    pub snippet: Snippet,
    pub score: i64,
    pub shared_path: Vec<String>,
}

/// Calculate the similarity score between two snippet names
///
/// Segments are compared position-by-position from the root; the comparison
/// stops at the first mismatch, so segments matching only after a gap do not
/// count. The score combines:
/// - prefix coverage: `(shared / max_depth) * 100`
/// - depth parity bonus: `(1 - |lenA - lenB| / max_depth) * 20`
/// - sibling bonus: +30 when both names share everything but the final
///   segment
///
/// Identical names are forced to score 0 so self-matches never surface in
/// recommendations; the shared path is still reported. The score is
/// unbounded above 100 when both bonuses apply - accepted, not corrected.
pub fn similarity(name_a: &str, name_b: &str) -> Similarity {
    let segments_a = parse_hierarchy(name_a);
    let segments_b = parse_hierarchy(name_b);

    let shared_path: Vec<String> = segments_a
        .iter()
        .zip(segments_b.iter())
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a.clone())
        .collect();
    let shared_depth = shared_path.len();

    if name_a == name_b {
        return Similarity {
            score: 0,
            shared_path,
        };
    }

    // No common root means unrelated: the depth-parity bonus alone must not
    // surface a recommendation
    let max_depth = segments_a.len().max(segments_b.len());
    if max_depth == 0 || shared_depth == 0 {
        return Similarity {
            score: 0,
            shared_path,
        };
    }

    let depth_difference = segments_a.len().abs_diff(segments_b.len());

    let mut score = (shared_depth as f64 / max_depth as f64) * 100.0;
    score += (1.0 - depth_difference as f64 / max_depth as f64) * 20.0;

    if shared_depth + 1 == segments_a.len() && shared_depth + 1 == segments_b.len() {
        score += 30.0;
    }

    Similarity {
        score: score.round() as i64,
        shared_path,
    }
}

/// Find the snippets most similar to a target name
///
/// Scores every candidate, discards non-positive scores (identical and
/// unrelated names), sorts descending with ties keeping input order, and
/// returns at most `limit` results.
pub fn find_similar(
    target_name: &str,
    candidates: &[Snippet],
    limit: usize,
) -> Vec<SimilarSnippet> {
    let mut scored: Vec<SimilarSnippet> = candidates
        .iter()
        .map(|snippet| {
            let Similarity { score, shared_path } = similarity(target_name, &snippet.name);
            SimilarSnippet {
                snippet: snippet.clone(),
                score,
                shared_path,
            }
        })
        .filter(|item| item.score > 0)
        .collect();

    // sort_by is stable: equal scores keep their input order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(name: &str) -> Snippet {
        Snippet::new(name.to_string(), "content".to_string(), None).unwrap()
    }

    #[test]
    fn test_identical_names_score_zero() {
        let result = similarity("geo_asia_japan", "geo_asia_japan");
        assert_eq!(result.score, 0);
        assert_eq!(result.shared_path, vec!["geo", "asia", "japan"]);
    }

    #[test]
    fn test_sibling_pair_scores_per_formula() {
        // shared 2 of 3, equal depth, siblings:
        // (2/3)*100 + 20 + 30 = 116.67 -> 117
        let result = similarity("geo_asia_japan", "geo_asia_china");
        assert_eq!(result.shared_path, vec!["geo", "asia"]);
        assert_eq!(result.score, 117);
    }

    #[test]
    fn test_unrelated_names_score_zero() {
        let result = similarity("geo_asia_japan", "industry_tech_saas");
        assert!(result.shared_path.is_empty());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_ancestor_descendant_scoring() {
        // shared 2 of 3, depth diff 1: (2/3)*100 + (1 - 1/3)*20 = 80
        let result = similarity("geo_asia", "geo_asia_japan");
        assert_eq!(result.score, 80);
        assert_eq!(result.shared_path, vec!["geo", "asia"]);
    }

    #[test]
    fn test_empty_names_score_zero() {
        assert_eq!(similarity("", "geo").score, 0);
        assert_eq!(similarity("___", "_").score, 0);
    }

    #[test]
    fn test_find_similar_filters_and_ranks() {
        let candidates = vec![
            snippet("geo_asia_japan"),
            snippet("geo_asia_china"),
            snippet("geo_europe_uk"),
            snippet("geo_asia"),
        ];

        let results = find_similar("geo_asia_japan", &candidates, 5);

        // the identical candidate is excluded; siblings rank first
        assert_eq!(results[0].snippet.name, "geo_asia_china");
        assert!(results.iter().all(|r| r.snippet.name != "geo_asia_japan"));
        assert!(results.iter().all(|r| r.score > 0));
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_find_similar_respects_limit_and_tie_order() {
        let candidates = vec![
            snippet("geo_asia_china"),
            snippet("geo_asia_korea"),
            snippet("geo_asia_india"),
        ];

        let results = find_similar("geo_asia_japan", &candidates, 2);

        assert_eq!(results.len(), 2);
        // all three tie; stable sort keeps input order
        assert_eq!(results[0].snippet.name, "geo_asia_china");
        assert_eq!(results[1].snippet.name, "geo_asia_korea");
    }
}
