//! GetCard command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::types::{Card, CardId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Get a card by ID
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCard {
    pub id: CardId,
}

operation!(GetCard, verb = "get", noun = "card", description = "Get a card by ID");

impl GetCard {
    pub fn new(id: impl Into<CardId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<KanbanContext, KanbanError> for GetCard {
    type Output = Card;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Card, KanbanError> {
        let result = ctx.read(|state| {
            state
                .card(&self.id)
                .cloned()
                .ok_or_else(|| KanbanError::CardNotFound {
                    id: self.id.to_string(),
                })
        });
        ExecutionResult::unlogged(result)
    }
}
