use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use snipforge_core::template::{compute_dependencies, render, validate, RenderOutcome};
use snipforge_core::DEFAULT_MAX_DEPTH;

use crate::state::AppState;
use crate::{ApiError, Result};

pub fn render_routes() -> Router<AppState> {
    Router::new()
        .route("/api/render", post(render_template))
        .route("/api/render/dependencies/{name}", get(dependencies))
}

#[derive(Debug, Deserialize)]
struct RenderRequest {
    template: Option<String>,
}

async fn render_template(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Json<serde_json::Value>> {
    let template = req
        .template
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Template is required".to_string()))?;

    // Validate template syntax before spending lookups on it
    let validation = validate(&template);
    if !validation.valid {
        return Err(ApiError::Rejected {
            message: "Invalid template".to_string(),
            errors: validation.errors,
        });
    }

    let outcome = render(&template, &state.store, DEFAULT_MAX_DEPTH);

    // Best-effort policy: partial output with warnings is a success, but
    // errors with nothing expanded means the render achieved nothing
    if render_achieved_nothing(&outcome, &template) {
        return Err(ApiError::Rejected {
            message: "Failed to render template".to_string(),
            errors: outcome.errors,
        });
    }

    Ok(Json(serde_json::json!({
        "rendered": outcome.rendered,
        "usedSnippets": outcome.used_snippets,
        "errors": outcome.errors,
    })))
}

/// True when the render produced errors and the output is unchanged input
fn render_achieved_nothing(outcome: &RenderOutcome, template: &str) -> bool {
    !outcome.errors.is_empty() && outcome.rendered == template
}

async fn dependencies(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let report = compute_dependencies(&name, &state.store);

    Ok(Json(serde_json::json!({
        "dependencies": report.dependencies,
        "errors": report.errors,
    })))
}
