pub mod groups;
pub mod path;
pub mod similarity;

pub use groups::group_by_top_level;
pub use path::{ancestor_paths, hierarchy_display, is_ancestor, parent_path, parse_hierarchy};
pub use similarity::{find_similar, similarity, SimilarSnippet, Similarity, DEFAULT_SIMILAR_LIMIT};
