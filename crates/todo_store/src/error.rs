//! Todo store error types.

use thiserror::Error;

/// Errors that can occur during todo store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error, tagged with the step that failed.
    #[error("{context}: {source}")]
    Database {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// The in-memory lock was poisoned by a panicking writer.
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

impl StoreError {
    /// Wraps a driver error with the name of the failing step.
    pub fn database(context: &'static str, source: sqlx::Error) -> Self {
        Self::Database { context, source }
    }
}

/// Result type for todo store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_carries_context() {
        let err = StoreError::database("ping postgres", sqlx::Error::PoolTimedOut);
        let message = err.to_string();
        assert!(message.starts_with("ping postgres: "));
    }
}
