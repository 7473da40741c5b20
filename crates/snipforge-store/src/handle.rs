//! Shared store handle
//!
//! Bridges the single-threaded rusqlite connection to callers that need a
//! cloneable, thread-safe handle (the HTTP state, the CLI). Queries are
//! short; the mutex is held only for the duration of one repository call.

#![allow(clippy::result_large_err)]

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;
use snipforge_core::{SnipError, Snippet, SnippetSource};

use crate::errors::Result;
use crate::repo::SnippetRepo;
use crate::{db, migrations};

/// Cloneable handle over an open, migrated database
#[derive(Clone)]
pub struct StoreHandle {
    conn: Arc<Mutex<Connection>>,
}

impl StoreHandle {
    /// Open (creating if needed) and migrate the database at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| SnipError::Persistence {
                    message: format!("Failed to create {}: {}", parent.display(), e),
                })?;
            }
        }

        let mut conn = db::open(path)?;
        db::configure(&conn)?;
        migrations::apply_migrations(&mut conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = db::open_in_memory()?;
        migrations::apply_migrations(&mut conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Lock the underlying connection for a repository call
    pub fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| SnipError::Internal {
            message: "store mutex poisoned".to_string(),
        })
    }
}

impl SnippetSource for StoreHandle {
    fn fetch(&self, name: &str) -> Result<Option<Snippet>> {
        let conn = self.conn().map_err(|e| SnipError::LookupFailed {
            name: name.to_string(),
            message: e.to_string(),
        })?;

        SnippetRepo::get(&conn, name).map_err(|e| SnipError::LookupFailed {
            name: name.to_string(),
            message: e.to_string(),
        })
    }
}
