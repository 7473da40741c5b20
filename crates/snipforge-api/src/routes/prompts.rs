use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use snipforge_core::template::{render, validate};
use snipforge_core::{ComposedPrompt, DEFAULT_MAX_DEPTH};
use snipforge_store::repo::PromptRepo;

use crate::state::AppState;
use crate::{ApiError, Result};

pub fn prompt_routes() -> Router<AppState> {
    Router::new()
        .route("/api/prompts", get(list_prompts).post(create_prompt))
        .route("/api/prompts/{id}", get(get_prompt).delete(delete_prompt))
}

async fn list_prompts(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let conn = state.store.conn()?;
    let prompts = PromptRepo::list(&conn)?;

    Ok(Json(serde_json::json!({ "prompts": prompts })))
}

#[derive(Debug, Deserialize)]
struct CreatePromptRequest {
    name: Option<String>,
    template: Option<String>,
}

async fn create_prompt(
    State(state): State<AppState>,
    Json(req): Json<CreatePromptRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let (name, template) = match (req.name, req.template) {
        (Some(name), Some(template)) if !name.is_empty() && !template.is_empty() => {
            (name, template)
        }
        _ => {
            return Err(ApiError::BadRequest(
                "Name and template are required".to_string(),
            ))
        }
    };

    let validation = validate(&template);
    if !validation.valid {
        return Err(ApiError::Rejected {
            message: "Invalid template".to_string(),
            errors: validation.errors,
        });
    }

    // Compositions are saved with their rendered form captured at save time;
    // unresolved references are allowed and surface as warnings
    let outcome = render(&template, &state.store, DEFAULT_MAX_DEPTH);

    let prompt = ComposedPrompt::new(name, template)?
        .with_render(outcome.rendered, outcome.used_snippets);

    {
        let conn = state.store.conn()?;
        PromptRepo::persist(&conn, &prompt)?;
    }

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "prompt": prompt,
            "errors": outcome.errors,
        })),
    ))
}

async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let conn = state.store.conn()?;
    let prompt = PromptRepo::require(&conn, &id)?;

    Ok(Json(serde_json::json!({ "prompt": prompt })))
}

async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let conn = state.store.conn()?;
    PromptRepo::delete(&conn, &id)?;

    Ok(Json(serde_json::json!({ "success": true })))
}
