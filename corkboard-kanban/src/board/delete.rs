//! DeleteBoard command

use crate::context::{KanbanContext, Outcome};
use crate::error::KanbanError;
use crate::types::BoardId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Delete a board with all of its lists and cards. Deleting an unknown board
/// is a no-op that yields `false`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBoard {
    /// The board ID to delete
    pub id: BoardId,
}

operation!(
    DeleteBoard,
    verb = "delete",
    noun = "board",
    description = "Delete a board and everything on it"
);

impl DeleteBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<KanbanContext, KanbanError> for DeleteBoard {
    type Output = bool;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<bool, KanbanError> {
        ctx.mutate_logged(self, |state| {
            let Some(index) = state.boards.iter().position(|b| b.id == self.id) else {
                return Ok(Outcome::unchanged(false));
            };

            let board = state.boards.remove(index);
            if state.current_board.as_ref() == Some(&self.id) {
                state.current_board = None;
            }

            info!(
                board = %board.id,
                lists = board.lists.len(),
                cards = board.card_count(),
                "deleted board '{}'",
                board.title
            );
            Ok(Outcome::changed(self.id.clone(), true))
        })
    }
}
