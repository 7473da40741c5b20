//! Similar command
//!
//! Usage: snipforge similar <NAME> [--limit <N>]

use std::path::Path;

use clap::Args;
use snipforge_core::hierarchy::{find_similar, DEFAULT_SIMILAR_LIMIT};
use snipforge_store::repo::SnippetRepo;
use snipforge_store::StoreHandle;

#[derive(Debug, Args)]
pub struct SimilarArgs {
    /// Name to rank against, e.g. geo_asia_korea
    pub name: String,

    /// Maximum number of results
    #[arg(short, long, default_value_t = DEFAULT_SIMILAR_LIMIT)]
    pub limit: usize,
}

/// Execute similar command
pub fn execute(db: &Path, args: SimilarArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = StoreHandle::open(db)?;
    let candidates = {
        let conn = store.conn()?;
        SnippetRepo::list(&conn, None)?
    };

    let results = find_similar(&args.name, &candidates, args.limit);

    if results.is_empty() {
        println!("No similar snippets for {}", args.name);
        return Ok(());
    }

    for item in results {
        println!(
            "{:>4}  {}  (shared: {})",
            item.score,
            item.snippet.name,
            item.shared_path.join(" > ")
        );
    }

    Ok(())
}
