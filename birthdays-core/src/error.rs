//! Error types for birthday operations.

use thiserror::Error;

/// Errors that can occur in birthday operations.
#[derive(Error, Debug)]
pub enum BirthdayError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Birthday not found: {0}")]
    NotFound(String),

    #[error("'{query}' matches several birthdays: {candidates}")]
    Ambiguous { query: String, candidates: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BirthdayError {
    /// Whether the error was caused by the data handed in rather than the
    /// environment (disk, config).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BirthdayError::InvalidDate(_) | BirthdayError::Validation(_)
        )
    }
}

/// Result type alias for birthday operations.
pub type BirthdayResult<T> = Result<T, BirthdayError>;
