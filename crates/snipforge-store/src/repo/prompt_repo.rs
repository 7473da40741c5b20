//! Composed prompt repository

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, from_serde, Result};
use rusqlite::{Connection, OptionalExtension};
use snipforge_core::{ComposedPrompt, SnipError};

/// SQLite repository for composed prompts
pub struct PromptRepo;

impl PromptRepo {
    /// Persist a composed prompt
    ///
    /// Upserts on id so re-saving after a re-render updates in place.
    pub fn persist(conn: &Connection, prompt: &ComposedPrompt) -> Result<()> {
        let used_snippets = serde_json::to_string(&prompt.used_snippets).map_err(from_serde)?;

        conn.execute(
            "INSERT INTO composed_prompts (id, name, template, rendered_content, used_snippets, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                template = excluded.template,
                rendered_content = excluded.rendered_content,
                used_snippets = excluded.used_snippets,
                updated_at = excluded.updated_at",
            rusqlite::params![
                prompt.id,
                prompt.name,
                prompt.template,
                prompt.rendered_content,
                used_snippets,
                prompt.created_at.timestamp_millis(),
                prompt.updated_at.timestamp_millis(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Get a composed prompt by id
    pub fn get(conn: &Connection, prompt_id: &str) -> Result<Option<ComposedPrompt>> {
        conn.query_row(
            "SELECT id, name, template, rendered_content, used_snippets, created_at, updated_at
             FROM composed_prompts WHERE id = ?1",
            [prompt_id],
            map_prompt_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get a composed prompt by id, erroring when absent
    pub fn require(conn: &Connection, prompt_id: &str) -> Result<ComposedPrompt> {
        Self::get(conn, prompt_id)?.ok_or_else(|| SnipError::PromptNotFound {
            prompt_id: prompt_id.to_string(),
        })
    }

    /// List all composed prompts, newest first
    pub fn list(conn: &Connection) -> Result<Vec<ComposedPrompt>> {
        let mut stmt = conn
            .prepare(
                "SELECT id, name, template, rendered_content, used_snippets, created_at, updated_at
                 FROM composed_prompts
                 ORDER BY created_at DESC, id DESC",
            )
            .map_err(from_rusqlite)?;

        let prompts = stmt
            .query_map([], map_prompt_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(prompts)
    }

    /// Delete a composed prompt by id; returns whether a row was removed
    pub fn delete(conn: &Connection, prompt_id: &str) -> Result<bool> {
        let affected = conn
            .execute("DELETE FROM composed_prompts WHERE id = ?1", [prompt_id])
            .map_err(from_rusqlite)?;

        Ok(affected > 0)
    }
}

fn map_prompt_row(
    row: &rusqlite::Row<'_>,
) -> std::result::Result<ComposedPrompt, rusqlite::Error> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let template: String = row.get(2)?;
    let rendered_content: Option<String> = row.get(3)?;
    let used_snippets_json: String = row.get(4)?;
    let created_at_ms: i64 = row.get(5)?;
    let updated_at_ms: i64 = row.get(6)?;

    Ok(ComposedPrompt {
        id,
        name,
        template,
        rendered_content,
        used_snippets: serde_json::from_str(&used_snippets_json).unwrap_or_default(),
        created_at: chrono::DateTime::from_timestamp_millis(created_at_ms)
            .unwrap_or_else(chrono::Utc::now),
        updated_at: chrono::DateTime::from_timestamp_millis(updated_at_ms)
            .unwrap_or_else(chrono::Utc::now),
    })
}
