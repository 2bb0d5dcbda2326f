//! Error types for the storage accessor

use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur when reading or writing the Q&A log
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite failed to open, prepare or execute
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The blocking task running the query panicked or was cancelled
    #[error("Storage task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
