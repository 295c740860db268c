//! Error types for the kanban engine

use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Caller supplied blank or otherwise unusable input
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// Board not found
    #[error("board not found: {id}")]
    BoardNotFound { id: String },

    /// List not found
    #[error("list not found: {id}")]
    ListNotFound { id: String },

    /// Card not found
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KanbanError {
    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if the caller's input was rejected
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if a referenced entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BoardNotFound { .. } | Self::ListNotFound { .. } | Self::CardNotFound { .. }
        )
    }
}

/// Trim `value` and reject it if nothing is left
pub(crate) fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(KanbanError::validation(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KanbanError::CardNotFound {
            id: "abc123".into(),
        };
        assert_eq!(err.to_string(), "card not found: abc123");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_error() {
        let err = KanbanError::validation("title", "must not be empty");
        assert_eq!(err.to_string(), "invalid title: must not be empty");
        assert!(err.is_validation());
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("title", "  Launch ").unwrap(), "Launch");
        assert!(require_text("title", "   ").unwrap_err().is_validation());
        assert!(require_text("title", "").is_err());
    }
}
