//! Snippet repository
//!
//! Persists snippets keyed by unique hierarchical name

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension};
use snipforge_core::{SnipError, Snippet};

/// SQLite repository for snippets
pub struct SnippetRepo;

impl SnippetRepo {
    /// Insert a new snippet
    ///
    /// # Errors
    /// * `AlreadyExists` - If a snippet with this name is already stored
    pub fn create(conn: &Connection, snippet: &Snippet) -> Result<()> {
        conn.execute(
            "INSERT INTO snippets (id, name, content, description, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                snippet.id,
                snippet.name,
                snippet.content,
                snippet.description,
                snippet.created_at.timestamp_millis(),
                snippet.updated_at.timestamp_millis(),
            ],
        )
        .map_err(|e| {
            if let rusqlite::Error::SqliteFailure(_, Some(message)) = &e {
                if message.contains("UNIQUE constraint failed: snippets.name") {
                    return SnipError::AlreadyExists {
                        name: snippet.name.clone(),
                    };
                }
            }
            from_rusqlite(e)
        })?;

        tracing::debug!(snippet = %snippet.name, "snippet created");
        Ok(())
    }

    /// Get a snippet by exact name
    pub fn get(conn: &Connection, name: &str) -> Result<Option<Snippet>> {
        conn.query_row(
            "SELECT id, name, content, description, created_at, updated_at
             FROM snippets WHERE name = ?1",
            [name],
            map_snippet_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List snippets, newest first, optionally filtered by a
    /// case-insensitive name substring
    pub fn list(conn: &Connection, search: Option<&str>) -> Result<Vec<Snippet>> {
        let mut stmt;
        let rows = match search {
            Some(needle) => {
                stmt = conn
                    .prepare(
                        "SELECT id, name, content, description, created_at, updated_at
                         FROM snippets
                         WHERE name LIKE '%' || ?1 || '%'
                         ORDER BY created_at DESC, id DESC",
                    )
                    .map_err(from_rusqlite)?;
                stmt.query_map([needle], map_snippet_row)
            }
            None => {
                stmt = conn
                    .prepare(
                        "SELECT id, name, content, description, created_at, updated_at
                         FROM snippets
                         ORDER BY created_at DESC, id DESC",
                    )
                    .map_err(from_rusqlite)?;
                stmt.query_map([], map_snippet_row)
            }
        }
        .map_err(from_rusqlite)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)
    }

    /// Update a snippet's content and/or description by name
    ///
    /// Fields passed as `None` are left untouched. Returns the updated row.
    ///
    /// # Errors
    /// * `NotFound` - If no snippet with this name exists
    pub fn update(
        conn: &Connection,
        name: &str,
        content: Option<&str>,
        description: Option<&str>,
    ) -> Result<Snippet> {
        let mut snippet = Self::get(conn, name)?.ok_or_else(|| SnipError::NotFound {
            name: name.to_string(),
        })?;

        if let Some(content) = content {
            snippet.content = content.to_string();
        }
        if let Some(description) = description {
            snippet.description = Some(description.to_string());
        }
        snippet.touch();

        conn.execute(
            "UPDATE snippets SET content = ?1, description = ?2, updated_at = ?3 WHERE name = ?4",
            rusqlite::params![
                snippet.content,
                snippet.description,
                snippet.updated_at.timestamp_millis(),
                name,
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(snippet)
    }

    /// Delete a snippet by name; returns whether a row was removed
    pub fn delete(conn: &Connection, name: &str) -> Result<bool> {
        let affected = conn
            .execute("DELETE FROM snippets WHERE name = ?1", [name])
            .map_err(from_rusqlite)?;

        Ok(affected > 0)
    }
}

fn map_snippet_row(row: &rusqlite::Row<'_>) -> std::result::Result<Snippet, rusqlite::Error> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let content: String = row.get(2)?;
    let description: Option<String> = row.get(3)?;
    let created_at_ms: i64 = row.get(4)?;
    let updated_at_ms: i64 = row.get(5)?;

    Ok(Snippet {
        id,
        name,
        content,
        description,
        created_at: chrono::DateTime::from_timestamp_millis(created_at_ms)
            .unwrap_or_else(chrono::Utc::now),
        updated_at: chrono::DateTime::from_timestamp_millis(updated_at_ms)
            .unwrap_or_else(chrono::Utc::now),
    })
}
