//! GetList command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::types::{List, ListId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Get a list, with its cards, by ID
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetList {
    pub id: ListId,
}

operation!(GetList, verb = "get", noun = "list", description = "Get a list by ID");

impl GetList {
    pub fn new(id: impl Into<ListId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<KanbanContext, KanbanError> for GetList {
    type Output = List;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<List, KanbanError> {
        let result = ctx.read(|state| {
            state
                .list(&self.id)
                .cloned()
                .ok_or_else(|| KanbanError::ListNotFound {
                    id: self.id.to_string(),
                })
        });
        ExecutionResult::unlogged(result)
    }
}
