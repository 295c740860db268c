//! CreateList command

use crate::context::{KanbanContext, Outcome};
use crate::error::{require_text, KanbanError};
use crate::types::{BoardId, List};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Append a new list to a board
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateList {
    /// The board to add the list to
    pub board_id: BoardId,
    /// The list title
    pub title: String,
}

operation!(
    CreateList,
    verb = "create",
    noun = "list",
    description = "Append a new list to a board"
);

impl CreateList {
    pub fn new(board_id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            title: title.into(),
        }
    }
}

impl Execute<KanbanContext, KanbanError> for CreateList {
    type Output = List;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<List, KanbanError> {
        ctx.mutate_logged(self, |state| {
            let title = require_text("title", &self.title)?;
            let board = state
                .board_mut(&self.board_id)
                .ok_or_else(|| KanbanError::BoardNotFound {
                    id: self.board_id.to_string(),
                })?;

            let index = board.push_list(title);
            board.touch();
            Ok(Outcome::changed(
                board.id.clone(),
                board.lists[index].clone(),
            ))
        })
    }
}
