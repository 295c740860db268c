//! DeleteList command

use crate::context::{KanbanContext, Outcome};
use crate::error::KanbanError;
use crate::types::{position, ListId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Delete a list and its cards, closing the gap in list positions
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteList {
    pub id: ListId,
}

operation!(
    DeleteList,
    verb = "delete",
    noun = "list",
    description = "Delete a list and its cards"
);

impl DeleteList {
    pub fn new(id: impl Into<ListId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<KanbanContext, KanbanError> for DeleteList {
    type Output = bool;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<bool, KanbanError> {
        ctx.mutate_logged(self, |state| {
            let Some((b, l)) = state.locate_list(&self.id) else {
                return Ok(Outcome::unchanged(false));
            };

            let board = &mut state.boards[b];
            let Some(list) = position::remove_at(&mut board.lists, l) else {
                return Ok(Outcome::unchanged(false));
            };
            board.touch();

            info!(list = %list.id, cards = list.cards.len(), "deleted list '{}'", list.title);
            Ok(Outcome::changed(board.id.clone(), true))
        })
    }
}
