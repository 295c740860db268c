//! MoveList command

use crate::context::{KanbanContext, Outcome};
use crate::error::KanbanError;
use crate::types::{position, List, ListId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Move a list to a new position within its board.
///
/// The target position is clamped to the last index. Moving an unknown list,
/// or moving a list onto the index it already occupies, changes nothing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveList {
    pub id: ListId,
    pub position: usize,
}

operation!(
    MoveList,
    verb = "move",
    noun = "list",
    description = "Move a list to a new position"
);

impl MoveList {
    pub fn new(id: impl Into<ListId>, position: usize) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

impl Execute<KanbanContext, KanbanError> for MoveList {
    type Output = Option<List>;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Option<List>, KanbanError> {
        ctx.mutate_logged(self, |state| {
            let Some((b, from)) = state.locate_list(&self.id) else {
                return Ok(Outcome::unchanged(None));
            };

            let board = &mut state.boards[b];
            let Some(to) = position::move_within(&mut board.lists, from, self.position) else {
                return Ok(Outcome::unchanged(None));
            };
            if to == from {
                return Ok(Outcome::unchanged(Some(board.lists[to].clone())));
            }

            board.touch();
            Ok(Outcome::changed(board.id.clone(), Some(board.lists[to].clone())))
        })
    }
}
