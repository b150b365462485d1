use thiserror::Error;

/// Storage-specific error types for submitted payments.
///
/// These errors cover database queries, schema migrations and database
/// configuration.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database connection or query execution failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration execution failed
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Specialized result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message() {
        let err = StorageError::Configuration("Invalid database path: x".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid database path: x");
    }
}
