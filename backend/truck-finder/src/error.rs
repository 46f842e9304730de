use thiserror::Error;

/// Result type for truck-finder operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Failures surfaced to the calling application. No retries and no local
/// recovery happen below this type.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required scalar parameter was missing or falsy; raised before any
    /// query is issued
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The store could not be reached or the session was lost
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    /// The store rejected the query, or its answer could not be decoded
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let session_lost = matches!(
            err,
            sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::Configuration(_)
        );

        if session_lost {
            AppError::ConnectionError(err.to_string())
        } else {
            AppError::QueryError(err.to_string())
        }
    }
}
