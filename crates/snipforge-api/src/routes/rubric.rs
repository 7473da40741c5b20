use axum::extract::Multipart;
use axum::routing::post;
use axum::{Json, Router};
use snipforge_core::rubric::{parse_rubric_structure, process_rubric_content};

use crate::state::AppState;
use crate::{docx, ApiError, Result};

pub fn rubric_routes() -> Router<AppState> {
    Router::new().route("/api/rubric", post(upload_rubric))
}

/// Accept a .docx upload, extract its text and return the cleaned rubric
/// together with the parsed structure
async fn upload_rubric(mut multipart: Multipart) -> Result<Json<serde_json::Value>> {
    let mut file_bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?;
            file_bytes = Some(bytes);
        }
    }

    let file_bytes =
        file_bytes.ok_or_else(|| ApiError::BadRequest("File is required".to_string()))?;

    let raw_text = docx::extract_text(&file_bytes)?;
    let content = process_rubric_content(&raw_text);
    let structure = parse_rubric_structure(&content);

    Ok(Json(serde_json::json!({
        "content": content,
        "structure": structure,
    })))
}
