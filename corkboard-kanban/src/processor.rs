//! Kanban operation processor

use crate::context::KanbanContext;
use crate::error::KanbanError;
use corkboard_operations::{LogEntry, OperationProcessor};
use tracing::trace;

/// Runs kanban commands and records their log entries in the context's
/// activity log, attributed to an optional actor.
#[derive(Debug, Clone, Default)]
pub struct KanbanOperationProcessor {
    actor: Option<String>,
}

impl KanbanOperationProcessor {
    /// A processor whose entries carry no actor
    pub fn new() -> Self {
        Self::default()
    }

    /// A processor that stamps `actor` on every entry it records
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }
}

impl OperationProcessor<KanbanContext, KanbanError> for KanbanOperationProcessor {
    fn record(&self, ctx: &KanbanContext, entry: LogEntry) {
        let entry = match &self.actor {
            Some(actor) => entry.with_actor(actor.clone()),
            None => entry,
        };
        trace!(op = %entry.op, actor = ?entry.actor, "recording activity");
        ctx.append_activity(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CreateBoard, GetBoard};
    use crate::card::DeleteCard;

    #[test]
    fn test_process_records_mutations_only() {
        let ctx = KanbanContext::new();
        let processor = KanbanOperationProcessor::with_actor("alice");

        let board = processor
            .process(&CreateBoard::new("Launch", "alice"), &ctx)
            .unwrap();
        processor.process(&GetBoard::new(&board.id), &ctx).unwrap();

        let activity = ctx.read_activity(None);
        assert_eq!(activity.len(), 1);
        assert_eq!(activity[0].op, "create board");
        assert_eq!(activity[0].actor.as_deref(), Some("alice"));
    }

    #[test]
    fn test_process_records_failures() {
        let ctx = KanbanContext::new();
        let processor = KanbanOperationProcessor::new();

        let result = processor.process(&CreateBoard::new("", "alice"), &ctx);
        assert!(result.is_err());

        let activity = ctx.read_activity(None);
        assert_eq!(activity.len(), 1);
        assert!(activity[0].actor.is_none());
        assert_eq!(activity[0].output["error"], "invalid title: must not be empty");
    }

    #[test]
    fn test_process_skips_noop_mutations() {
        let ctx = KanbanContext::new();
        let processor = KanbanOperationProcessor::new();

        processor
            .process(&CreateBoard::new("Launch", "alice"), &ctx)
            .unwrap();
        let deleted = processor
            .process(&DeleteCard::new("missing"), &ctx)
            .unwrap();

        assert!(!deleted);
        let activity = ctx.read_activity(None);
        assert_eq!(activity.len(), 1);
        assert_eq!(activity[0].op, "create board");
    }
}
