//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// `NotFound` is a distinct outcome so callers can tell a missing record
/// apart from a genuine store failure.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database connection failed: {0}")]
    Connection(String),

    #[error("query execution failed: {0}")]
    Query(String),

    #[error("invalid record id: {0}")]
    InvalidId(String),

    #[error("record not found")]
    NotFound,
}
