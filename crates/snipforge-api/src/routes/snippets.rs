use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use snipforge_core::hierarchy::group_by_top_level;
use snipforge_core::Snippet;
use snipforge_store::repo::SnippetRepo;

use crate::state::AppState;
use crate::{ApiError, Result};

pub fn snippet_routes() -> Router<AppState> {
    Router::new()
        .route("/api/snippets", get(list_snippets).post(create_snippet))
        .route("/api/snippets/groups", get(group_snippets))
        .route(
            "/api/snippets/{name}",
            get(get_snippet).put(update_snippet).delete(delete_snippet),
        )
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    search: Option<String>,
}

async fn list_snippets(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<serde_json::Value>> {
    let conn = state.store.conn()?;
    let snippets = SnippetRepo::list(&conn, query.search.as_deref())?;

    Ok(Json(serde_json::json!({ "snippets": snippets })))
}

#[derive(Debug, Deserialize)]
struct CreateSnippetRequest {
    name: Option<String>,
    content: Option<String>,
    description: Option<String>,
}

async fn create_snippet(
    State(state): State<AppState>,
    Json(req): Json<CreateSnippetRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let (name, content) = match (req.name, req.content) {
        (Some(name), Some(content)) if !name.is_empty() && !content.is_empty() => (name, content),
        _ => {
            return Err(ApiError::BadRequest(
                "Name and content are required".to_string(),
            ))
        }
    };

    let snippet = Snippet::new(name, content, req.description)?;
    {
        let conn = state.store.conn()?;
        SnippetRepo::create(&conn, &snippet)?;
    }

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "snippet": snippet })),
    ))
}

async fn get_snippet(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let conn = state.store.conn()?;
    let snippet = SnippetRepo::get(&conn, &name)?
        .ok_or_else(|| ApiError::NotFound("Snippet not found".to_string()))?;

    Ok(Json(serde_json::json!({ "snippet": snippet })))
}

#[derive(Debug, Deserialize)]
struct UpdateSnippetRequest {
    content: Option<String>,
    description: Option<String>,
}

async fn update_snippet(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<UpdateSnippetRequest>,
) -> Result<Json<serde_json::Value>> {
    let conn = state.store.conn()?;
    let snippet = SnippetRepo::update(
        &conn,
        &name,
        req.content.as_deref(),
        req.description.as_deref(),
    )?;

    Ok(Json(serde_json::json!({ "snippet": snippet })))
}

async fn delete_snippet(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let conn = state.store.conn()?;
    SnippetRepo::delete(&conn, &name)?;

    Ok(Json(serde_json::json!({ "success": true })))
}

async fn group_snippets(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let snippets = {
        let conn = state.store.conn()?;
        SnippetRepo::list(&conn, None)?
    };

    let groups = group_by_top_level(&snippets);

    Ok(Json(serde_json::json!({ "groups": groups })))
}
