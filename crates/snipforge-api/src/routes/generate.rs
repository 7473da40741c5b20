use std::collections::BTreeMap;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use snipforge_core::GenerationSession;
use snipforge_llm::{generate_snippet, GenerationRequest};
use snipforge_store::repo::{SessionRepo, SnippetRepo};

use crate::state::AppState;
use crate::{ApiError, Result};

pub fn generate_routes() -> Router<AppState> {
    Router::new().route("/api/generate", post(generate))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateApiRequest {
    snippet_name: Option<String>,
    context: Option<String>,
    #[serde(default)]
    similar_snippets: Vec<String>,
    rubric_content: Option<String>,
}

async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateApiRequest>,
) -> Result<Json<serde_json::Value>> {
    let (snippet_name, context) = match (req.snippet_name, req.context) {
        (Some(name), Some(context)) if !name.is_empty() && !context.is_empty() => (name, context),
        _ => {
            return Err(ApiError::BadRequest(
                "Snippet name and context are required".to_string(),
            ))
        }
    };

    let client = state.llm.clone().ok_or(ApiError::LlmUnavailable)?;

    // Resolve reference snippets by name; unknown names are skipped rather
    // than failing the whole run
    let similar_snippets = {
        let conn = state.store.conn()?;
        let mut resolved = Vec::with_capacity(req.similar_snippets.len());
        for name in &req.similar_snippets {
            if let Some(snippet) = SnippetRepo::get(&conn, name)? {
                resolved.push(snippet);
            }
        }
        resolved
    };

    let mut session = GenerationSession::new(
        snippet_name.clone(),
        context.clone(),
        similar_snippets.iter().map(|s| s.name.clone()).collect(),
    );
    {
        let conn = state.store.conn()?;
        SessionRepo::persist(&conn, &session)?;
    }

    let request = GenerationRequest {
        snippet_name,
        context,
        similar_snippets,
        rubric_content: req.rubric_content,
    };

    let outcome = generate_snippet(&client, &state.roster, &request).await?;

    let responses: BTreeMap<String, String> = outcome
        .responses
        .iter()
        .map(|r| (r.model.clone(), r.content.clone()))
        .collect();

    session.complete(responses.clone(), outcome.final_content.clone());
    {
        let conn = state.store.conn()?;
        SessionRepo::persist(&conn, &session)?;
    }

    Ok(Json(serde_json::json!({
        "sessionId": session.id,
        "finalContent": outcome.final_content,
        "responses": responses,
    })))
}
