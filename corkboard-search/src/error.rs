//! Error types for search history persistence

use thiserror::Error;

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Search specific errors
#[derive(Error, Debug)]
pub enum SearchError {
    /// File system operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failed
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
