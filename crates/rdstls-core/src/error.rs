//! Error types for rdstls-core

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by the customer store.
///
/// An empty collection is never an error; these variants cover medium-level
/// failure only.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The durable medium is unreachable, rejected a write, or returned
    /// malformed data
    #[error("Database error: {0}")]
    Database(String),

    /// Schema initialization or migration failure
    #[error("Migration error: {0}")]
    Migration(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}
