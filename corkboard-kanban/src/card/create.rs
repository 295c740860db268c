//! CreateCard command

use crate::context::{KanbanContext, Outcome};
use crate::error::{require_text, KanbanError};
use crate::types::{Card, ListId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Append a new card to the end of a list
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCard {
    /// The list to add the card to
    pub list_id: ListId,
    /// The card title
    pub title: String,
    /// Optional description
    pub description: Option<String>,
}

operation!(
    CreateCard,
    verb = "create",
    noun = "card",
    description = "Append a new card to a list"
);

impl CreateCard {
    /// Create a new CreateCard command
    pub fn new(list_id: impl Into<ListId>, title: impl Into<String>) -> Self {
        Self {
            list_id: list_id.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Execute<KanbanContext, KanbanError> for CreateCard {
    type Output = Card;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Card, KanbanError> {
        ctx.mutate_logged(self, |state| {
            let title = require_text("title", &self.title)?;
            let (b, l) = state
                .locate_list(&self.list_id)
                .ok_or_else(|| KanbanError::ListNotFound {
                    id: self.list_id.to_string(),
                })?;

            let mut card = Card::new(self.list_id.clone(), title);
            card.description = self.description.clone();

            let board = &mut state.boards[b];
            let card = board.lists[l].push_card(card).clone();
            board.touch();
            Ok(Outcome::changed(board.id.clone(), card))
        })
    }
}
