//! AddLabel command

use crate::context::{KanbanContext, Outcome};
use crate::defaults::catalog_label;
use crate::error::KanbanError;
use crate::types::{Card, CardId, Label, LabelId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Attach a label to a card
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLabel {
    pub card_id: CardId,
    pub label: Label,
}

operation!(
    AddLabel,
    verb = "add",
    noun = "label",
    description = "Attach a label to a card"
);

impl AddLabel {
    pub fn new(card_id: impl Into<CardId>, label: Label) -> Self {
        Self {
            card_id: card_id.into(),
            label,
        }
    }

    /// Attach one of the predefined labels; `None` if the id is not in the catalog
    pub fn from_catalog(card_id: impl Into<CardId>, label_id: &LabelId) -> Option<Self> {
        catalog_label(label_id).map(|label| Self::new(card_id, label))
    }
}

impl Execute<KanbanContext, KanbanError> for AddLabel {
    type Output = Option<Card>;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Option<Card>, KanbanError> {
        ctx.mutate_logged(self, |state| {
            let Some((b, l, c)) = state.locate_card(&self.card_id) else {
                return Ok(Outcome::unchanged(None));
            };

            let board = &mut state.boards[b];
            let card = &mut board.lists[l].cards[c];
            if !card.add_label(self.label.clone()) {
                return Ok(Outcome::unchanged(Some(card.clone())));
            }
            let card = card.clone();
            board.touch();
            Ok(Outcome::changed(board.id.clone(), Some(card)))
        })
    }
}
