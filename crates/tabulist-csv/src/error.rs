//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur during CSV operations
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error (writing)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Both a reader and an in-memory buffer were supplied
    #[error("Ambiguous parse source: supply either a reader or a buffer, not both")]
    AmbiguousSource,

    /// Neither a reader nor an in-memory buffer was supplied
    #[error("Missing parse source: supply a reader or a buffer")]
    MissingSource,

    /// Option values that no parse can run with
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl CsvError {
    /// Check if this is a configuration error (bad source or options)
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CsvError::AmbiguousSource | CsvError::MissingSource | CsvError::InvalidOptions(_)
        )
    }
}
