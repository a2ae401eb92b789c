//! Unified error type for data layer
//!
//! Wraps backend-specific errors (SQLite, in-memory) behind one type so the
//! domain layer never sees a concrete backend.

use thiserror::Error;

/// Unified error type for player store operations
#[derive(Error, Debug)]
pub enum DataError {
    /// SQLite database error
    #[error("SQLite error: {0}")]
    Sqlite(sqlx::Error),

    /// Migration failed
    #[error("Migration {version} ({name}) failed on {backend}: {error}")]
    MigrationFailed {
        backend: &'static str,
        version: i32,
        name: String,
        error: String,
    },

    /// Stored row could not be mapped back to a player
    #[error("Invalid row on {backend}: {reason}")]
    InvalidRow {
        backend: &'static str,
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// Create a migration failed error
    pub fn migration_failed(backend: &'static str, version: i32, name: &str, error: &str) -> Self {
        Self::MigrationFailed {
            backend,
            version,
            name: name.to_string(),
            error: error.to_string(),
        }
    }

    /// Check if this is a connection-related error that might be transient
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Sqlite(e) => matches!(
                e,
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            ),
            _ => false,
        }
    }

    /// Get the backend name that generated this error
    pub fn backend(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite",
            Self::MigrationFailed { backend, .. } | Self::InvalidRow { backend, .. } => backend,
            Self::Io(_) => "unknown",
        }
    }
}

/// Convert from the SQLite backend error type
impl From<crate::data::sqlite::SqliteError> for DataError {
    fn from(e: crate::data::sqlite::SqliteError) -> Self {
        use crate::data::sqlite::SqliteError;
        match e {
            SqliteError::Database(e) => Self::Sqlite(e),
            SqliteError::MigrationFailed {
                version,
                name,
                error,
            } => Self::MigrationFailed {
                backend: "sqlite",
                version,
                name,
                error,
            },
            SqliteError::InvalidRow(reason) => Self::InvalidRow {
                backend: "sqlite",
                reason,
            },
            SqliteError::Io(e) => Self::Io(e),
        }
    }
}
