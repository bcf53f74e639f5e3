//! Error types for the storage layer.

use thiserror::Error;

/// Errors that can occur while talking to the SQLite store.
#[derive(Debug, Error)]
pub enum DbError {
    /// SQLite rejected the statement or the row could not be decoded
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A previous holder of the connection lock panicked
    #[error("Database connection lock poisoned")]
    Poisoned,
}
