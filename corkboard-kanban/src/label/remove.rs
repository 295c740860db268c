//! RemoveLabel command

use crate::context::{KanbanContext, Outcome};
use crate::error::KanbanError;
use crate::types::{Card, CardId, LabelId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Detach a label from a card
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveLabel {
    pub card_id: CardId,
    pub label_id: LabelId,
}

operation!(
    RemoveLabel,
    verb = "remove",
    noun = "label",
    description = "Detach a label from a card"
);

impl RemoveLabel {
    pub fn new(card_id: impl Into<CardId>, label_id: impl Into<LabelId>) -> Self {
        Self {
            card_id: card_id.into(),
            label_id: label_id.into(),
        }
    }
}

impl Execute<KanbanContext, KanbanError> for RemoveLabel {
    type Output = Option<Card>;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Option<Card>, KanbanError> {
        ctx.mutate_logged(self, |state| {
            let Some((b, l, c)) = state.locate_card(&self.card_id) else {
                return Ok(Outcome::unchanged(None));
            };

            let board = &mut state.boards[b];
            let card = &mut board.lists[l].cards[c];
            if !card.remove_label(&self.label_id) {
                return Ok(Outcome::unchanged(Some(card.clone())));
            }
            let card = card.clone();
            board.touch();
            Ok(Outcome::changed(board.id.clone(), Some(card)))
        })
    }
}
