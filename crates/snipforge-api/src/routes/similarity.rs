use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use snipforge_core::hierarchy::{find_similar, DEFAULT_SIMILAR_LIMIT};
use snipforge_store::repo::SnippetRepo;

use crate::state::AppState;
use crate::{ApiError, Result};

pub fn similarity_routes() -> Router<AppState> {
    Router::new().route("/api/similarity", get(similar_snippets))
}

#[derive(Debug, Deserialize)]
struct SimilarityQuery {
    name: Option<String>,
    limit: Option<usize>,
}

async fn similar_snippets(
    State(state): State<AppState>,
    Query(query): Query<SimilarityQuery>,
) -> Result<Json<serde_json::Value>> {
    let name = query
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Name parameter is required".to_string()))?;

    let all_snippets = {
        let conn = state.store.conn()?;
        SnippetRepo::list(&conn, None)?
    };

    let limit = query.limit.unwrap_or(DEFAULT_SIMILAR_LIMIT);
    let results = find_similar(&name, &all_snippets, limit);

    let similar: Vec<serde_json::Value> = results
        .into_iter()
        .map(|item| {
            serde_json::json!({
                "snippet": item.snippet,
                "score": item.score,
                "sharedPath": item.shared_path,
            })
        })
        .collect();

    Ok(Json(serde_json::json!({ "similarSnippets": similar })))
}
