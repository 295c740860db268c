//! Processor trait: run an operation and deal with its log entry

use crate::{Execute, LogEntry};

/// Executes operations and routes their log entries somewhere durable.
///
/// Implementations decide where entries go (an in-memory activity feed, a
/// JSONL file, nowhere). Callers only see the operation's own result.
pub trait OperationProcessor<C, E> {
    /// Execute `op` against `ctx`, recording its log entry if it produced one
    fn process<O>(&self, op: &O, ctx: &C) -> Result<O::Output, E>
    where
        O: Execute<C, E>,
    {
        let (result, log_entry) = op.execute(ctx).split();
        if let Some(entry) = log_entry {
            self.record(ctx, entry);
        }
        result
    }

    /// Store a log entry produced by a processed operation
    fn record(&self, ctx: &C, entry: LogEntry);
}
