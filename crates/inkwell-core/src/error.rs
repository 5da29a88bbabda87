//! Store-level error types.

use thiserror::Error;

/// Failure of a store operation.
///
/// The API surfaces every variant the same way, so the variants only
/// carry enough to produce a useful message.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Unexpected store response: {0}")]
    Decode(String),
}
