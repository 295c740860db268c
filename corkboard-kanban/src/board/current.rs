//! Current board selection

use crate::context::{KanbanContext, Outcome};
use crate::error::KanbanError;
use crate::types::{Board, BoardId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Select the session's current board.
///
/// An unknown id clears the selection and yields `None`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCurrentBoard {
    pub id: BoardId,
}

operation!(
    SetCurrentBoard,
    verb = "set",
    noun = "current board",
    description = "Select the current board"
);

impl SetCurrentBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<KanbanContext, KanbanError> for SetCurrentBoard {
    type Output = Option<Board>;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Option<Board>, KanbanError> {
        ctx.mutate_logged(self, |state| {
            let board = state.board(&self.id).cloned();
            let selected = board.as_ref().map(|b| b.id.clone());

            if state.current_board == selected {
                return Ok(Outcome::unchanged(board));
            }
            state.current_board = selected.clone();
            Ok(Outcome::changed(selected, board))
        })
    }
}

/// The session's current board, if one is selected
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct GetCurrentBoard;

operation!(
    GetCurrentBoard,
    verb = "get",
    noun = "current board",
    description = "Get the current board"
);

impl GetCurrentBoard {
    pub fn new() -> Self {
        Self
    }
}

impl Execute<KanbanContext, KanbanError> for GetCurrentBoard {
    type Output = Option<Board>;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Option<Board>, KanbanError> {
        let board = ctx.read(|state| {
            state
                .current_board
                .as_ref()
                .and_then(|id| state.board(id))
                .cloned()
        });
        ExecutionResult::unlogged(Ok(board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CreateBoard;

    #[test]
    fn test_set_current_board() {
        let ctx = KanbanContext::new();
        let first = CreateBoard::new("First", "user-1")
            .execute(&ctx)
            .into_result()
            .unwrap();
        CreateBoard::new("Second", "user-1")
            .execute(&ctx)
            .into_result()
            .unwrap();

        let selected = SetCurrentBoard::new(&first.id)
            .execute(&ctx)
            .into_result()
            .unwrap()
            .unwrap();

        assert_eq!(selected.id, first.id);
        let current = GetCurrentBoard::new().execute(&ctx).into_result().unwrap();
        assert_eq!(current.unwrap().id, first.id);
    }

    #[test]
    fn test_set_unknown_board_clears_selection() {
        let ctx = KanbanContext::new();
        CreateBoard::new("Launch", "user-1")
            .execute(&ctx)
            .into_result()
            .unwrap();

        let selected = SetCurrentBoard::new("missing")
            .execute(&ctx)
            .into_result()
            .unwrap();

        assert!(selected.is_none());
        assert!(ctx.current_board_id().is_none());
        assert!(GetCurrentBoard::new()
            .execute(&ctx)
            .into_result()
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_reselect_is_not_a_change() {
        let ctx = KanbanContext::new();
        let board = CreateBoard::new("Launch", "user-1")
            .execute(&ctx)
            .into_result()
            .unwrap();
        let mut rx = ctx.subscribe();

        SetCurrentBoard::new(&board.id)
            .execute(&ctx)
            .into_result()
            .unwrap();

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_get_current_board_is_unlogged() {
        let ctx = KanbanContext::new();
        assert!(!GetCurrentBoard::new().execute(&ctx).should_log());
    }
}
