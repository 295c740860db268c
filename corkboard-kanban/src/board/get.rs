//! Board read commands

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::types::{Board, BoardId, UserId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Get a board by ID
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBoard {
    pub id: BoardId,
}

operation!(GetBoard, verb = "get", noun = "board", description = "Get a board by ID");

impl GetBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<KanbanContext, KanbanError> for GetBoard {
    type Output = Board;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Board, KanbanError> {
        let result = ctx.read(|state| {
            state
                .board(&self.id)
                .cloned()
                .ok_or_else(|| KanbanError::BoardNotFound {
                    id: self.id.to_string(),
                })
        });
        ExecutionResult::unlogged(result)
    }
}

/// List boards in store order, optionally only those owned by one user
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBoards {
    pub user_id: Option<UserId>,
}

operation!(ListBoards, verb = "list", noun = "boards", description = "List boards");

impl ListBoards {
    /// Every board in the store
    pub fn all() -> Self {
        Self { user_id: None }
    }

    /// Boards owned by `user_id`
    pub fn for_user(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }
}

impl Execute<KanbanContext, KanbanError> for ListBoards {
    type Output = Vec<Board>;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Vec<Board>, KanbanError> {
        let boards = ctx.read(|state| match &self.user_id {
            Some(user) => state.boards_for(user).cloned().collect(),
            None => state.boards.clone(),
        });
        ExecutionResult::unlogged(Ok(boards))
    }
}
