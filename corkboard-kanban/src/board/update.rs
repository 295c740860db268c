//! UpdateBoard command

use crate::context::{KanbanContext, Outcome};
use crate::error::{require_text, KanbanError};
use crate::types::{Board, BoardId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Update board properties. An unknown board is left alone and yields `None`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoard {
    /// The board ID to update
    pub id: BoardId,
    /// New title
    pub title: Option<String>,
}

operation!(
    UpdateBoard,
    verb = "update",
    noun = "board",
    description = "Update board properties"
);

impl UpdateBoard {
    /// Create a new UpdateBoard command
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self {
            id: id.into(),
            title: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Execute<KanbanContext, KanbanError> for UpdateBoard {
    type Output = Option<Board>;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Option<Board>, KanbanError> {
        ctx.mutate_logged(self, |state| {
            let title = self
                .title
                .as_deref()
                .map(|t| require_text("title", t))
                .transpose()?;

            let Some(board) = state.board_mut(&self.id) else {
                return Ok(Outcome::unchanged(None));
            };

            if let Some(title) = title {
                board.title = title;
            }
            board.touch();
            Ok(Outcome::changed(board.id.clone(), Some(board.clone())))
        })
    }
}
