//! DeleteCard command

use crate::context::{KanbanContext, Outcome};
use crate::error::KanbanError;
use crate::types::{position, CardId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Delete a card, closing the gap in its list
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCard {
    pub id: CardId,
}

operation!(DeleteCard, verb = "delete", noun = "card", description = "Delete a card");

impl DeleteCard {
    pub fn new(id: impl Into<CardId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<KanbanContext, KanbanError> for DeleteCard {
    type Output = bool;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<bool, KanbanError> {
        ctx.mutate_logged(self, |state| {
            let Some((b, l, c)) = state.locate_card(&self.id) else {
                return Ok(Outcome::unchanged(false));
            };

            let board = &mut state.boards[b];
            if position::remove_at(&mut board.lists[l].cards, c).is_none() {
                return Ok(Outcome::unchanged(false));
            }
            board.touch();
            Ok(Outcome::changed(board.id.clone(), true))
        })
    }
}
