//! Generation session repository

#![allow(clippy::result_large_err)]

use std::collections::BTreeMap;

use crate::errors::{from_rusqlite, from_serde, Result};
use rusqlite::{Connection, OptionalExtension};
use snipforge_core::{GenerationSession, SessionStatus, SnipError};

/// SQLite repository for generation sessions
pub struct SessionRepo;

impl SessionRepo {
    /// Persist a generation session
    ///
    /// Upserts on id; the generate flow writes once at session start and
    /// again when results land.
    pub fn persist(conn: &Connection, session: &GenerationSession) -> Result<()> {
        let similar_snippets =
            serde_json::to_string(&session.similar_snippets).map_err(from_serde)?;
        let llm_responses = serde_json::to_string(&session.llm_responses).map_err(from_serde)?;

        conn.execute(
            "INSERT INTO generation_sessions (id, snippet_name, user_context, similar_snippets, llm_responses, final_combined, status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             ON CONFLICT(id) DO UPDATE SET
                llm_responses = excluded.llm_responses,
                final_combined = excluded.final_combined,
                status = excluded.status,
                updated_at = excluded.updated_at",
            rusqlite::params![
                session.id,
                session.snippet_name,
                session.user_context,
                similar_snippets,
                llm_responses,
                session.final_combined,
                session.status.as_str(),
                session.created_at.timestamp_millis(),
                session.updated_at.timestamp_millis(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Get a generation session by id
    pub fn get(conn: &Connection, session_id: &str) -> Result<Option<GenerationSession>> {
        conn.query_row(
            "SELECT id, snippet_name, user_context, similar_snippets, llm_responses, final_combined, status, created_at, updated_at
             FROM generation_sessions WHERE id = ?1",
            [session_id],
            map_session_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get a generation session by id, erroring when absent
    pub fn require(conn: &Connection, session_id: &str) -> Result<GenerationSession> {
        Self::get(conn, session_id)?.ok_or_else(|| SnipError::SessionNotFound {
            session_id: session_id.to_string(),
        })
    }
}

fn map_session_row(
    row: &rusqlite::Row<'_>,
) -> std::result::Result<GenerationSession, rusqlite::Error> {
    let id: String = row.get(0)?;
    let snippet_name: String = row.get(1)?;
    let user_context: String = row.get(2)?;
    let similar_snippets_json: String = row.get(3)?;
    let llm_responses_json: String = row.get(4)?;
    let final_combined: Option<String> = row.get(5)?;
    let status: String = row.get(6)?;
    let created_at_ms: i64 = row.get(7)?;
    let updated_at_ms: i64 = row.get(8)?;

    let similar_snippets: Vec<String> =
        serde_json::from_str(&similar_snippets_json).unwrap_or_default();
    let llm_responses: BTreeMap<String, String> =
        serde_json::from_str(&llm_responses_json).unwrap_or_default();

    Ok(GenerationSession {
        id,
        snippet_name,
        user_context,
        similar_snippets,
        llm_responses,
        final_combined,
        status: SessionStatus::parse(&status).unwrap_or(SessionStatus::InProgress),
        created_at: chrono::DateTime::from_timestamp_millis(created_at_ms)
            .unwrap_or_else(chrono::Utc::now),
        updated_at: chrono::DateTime::from_timestamp_millis(updated_at_ms)
            .unwrap_or_else(chrono::Utc::now),
    })
}
