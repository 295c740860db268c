//! Execution result types for operations

use crate::LogEntry;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use std::time::Instant;

/// Result of executing an operation
///
/// Distinguishes between:
/// - Logged: Operations that mutate state and should be audited
/// - Unlogged: Read-only operations with no side effects
/// - Failed: Errors (optionally logged)
#[derive(Debug)]
pub enum ExecutionResult<T, E> {
    /// Operation succeeded and should be logged
    Logged { value: T, log_entry: LogEntry },
    /// Operation succeeded but no logging needed (read-only)
    Unlogged { value: T },
    /// Operation failed
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<T, E> ExecutionResult<T, E> {
    /// Extract the result (Ok or Err)
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Logged { value, .. } => Ok(value),
            Self::Unlogged { value } => Ok(value),
            Self::Failed { error, .. } => Err(error),
        }
    }

    /// Get the value and log entry separately
    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unlogged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }

    /// Check if this should be logged
    pub fn should_log(&self) -> bool {
        matches!(
            self,
            Self::Logged { .. }
                | Self::Failed {
                    log_entry: Some(_),
                    ..
                }
        )
    }

    /// Wrap a read-only result: success is unlogged, failure carries no entry
    pub fn unlogged(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Unlogged { value },
            Err(error) => Self::Failed {
                error,
                log_entry: None,
            },
        }
    }
}

impl<T: Serialize, E: Display> ExecutionResult<T, E> {
    /// Wrap the result of a mutating operation, building its log entry.
    ///
    /// `started` is when the operation began; the entry records the elapsed
    /// time. Failures are logged with `{"error": message}` as output.
    pub fn logged(op: String, input: Value, started: Instant, result: Result<T, E>) -> Self {
        let duration_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(value) => {
                let output = serde_json::to_value(&value).unwrap_or(Value::Null);
                Self::Logged {
                    value,
                    log_entry: LogEntry::new(op, input, output, None, duration_ms),
                }
            }
            Err(error) => {
                let error_msg = error.to_string();
                Self::Failed {
                    error,
                    log_entry: Some(LogEntry::failure(op, input, &error_msg, duration_ms)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_success() {
        let result: ExecutionResult<u32, String> =
            ExecutionResult::logged("count cards".into(), Value::Null, Instant::now(), Ok(4));
        assert!(result.should_log());

        let (value, entry) = result.split();
        assert_eq!(value.unwrap(), 4);
        let entry = entry.unwrap();
        assert_eq!(entry.op, "count cards");
        assert_eq!(entry.output, serde_json::json!(4));
    }

    #[test]
    fn test_logged_failure_keeps_entry() {
        let result: ExecutionResult<u32, String> = ExecutionResult::logged(
            "create list".into(),
            serde_json::json!({"title": ""}),
            Instant::now(),
            Err("title must not be empty".into()),
        );
        assert!(result.should_log());

        let (value, entry) = result.split();
        assert_eq!(value.unwrap_err(), "title must not be empty");
        assert_eq!(entry.unwrap().output["error"], "title must not be empty");
    }

    #[test]
    fn test_unlogged() {
        let ok: ExecutionResult<&str, String> = ExecutionResult::unlogged(Ok("board"));
        assert!(!ok.should_log());
        assert_eq!(ok.into_result().unwrap(), "board");

        let err: ExecutionResult<&str, String> = ExecutionResult::unlogged(Err("missing".into()));
        assert!(!err.should_log());
        assert!(err.into_result().is_err());
    }
}
