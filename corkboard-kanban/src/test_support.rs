//! Helpers shared by unit tests

use crate::context::{KanbanContext, Outcome};
use crate::types::BoardId;
use chrono::{DateTime, Duration, Utc};

/// Move a board's `updated_at` a day into the past so a later bump is visible.
/// Returns the timestamp that was set.
pub(crate) fn backdate(ctx: &KanbanContext, board_id: &BoardId) -> DateTime<Utc> {
    let past = Utc::now() - Duration::days(1);
    ctx.mutate("backdate board", |state| {
        if let Some(board) = state.board_mut(board_id) {
            board.updated_at = past;
        }
        Ok(Outcome::changed(board_id.clone(), ()))
    })
    .unwrap();
    past
}

/// Current `updated_at` of a board
pub(crate) fn updated_at(ctx: &KanbanContext, board_id: &BoardId) -> DateTime<Utc> {
    ctx.read(|state| state.board(board_id).map(|b| b.updated_at))
        .unwrap()
}
