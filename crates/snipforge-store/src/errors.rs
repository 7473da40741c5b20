//! Error handling for snipforge-store
//!
//! Wraps snipforge-core SnipError with store-specific helpers

use snipforge_core::SnipError;

/// Result type alias using SnipError
pub type Result<T> = std::result::Result<T, SnipError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> SnipError {
    SnipError::Persistence {
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> SnipError {
    SnipError::Persistence {
        message: format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ),
    }
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> SnipError {
    SnipError::Persistence {
        message: err.to_string(),
    }
}

/// Create a serialization error from serde_json::Error
pub fn from_serde(err: serde_json::Error) -> SnipError {
    SnipError::Serialization {
        message: err.to_string(),
    }
}
