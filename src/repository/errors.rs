use thiserror::Error;

/// Errors raised by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No pooled connection could be acquired.
    #[error("connection pool error: {0}")]
    ConnectionError(#[from] diesel::r2d2::PoolError),
    /// The query itself failed.
    #[error("database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),
    /// A stored row violates a domain constraint.
    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
