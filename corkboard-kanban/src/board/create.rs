//! CreateBoard command

use crate::context::{KanbanContext, Outcome};
use crate::defaults::{sample_cards, DEFAULT_LISTS};
use crate::error::{require_text, KanbanError};
use crate::types::{Board, Card, UserId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Create a board with the default lists and make it the current board
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoard {
    /// The board title
    pub title: String,
    /// The owning user
    pub owner: UserId,
}

operation!(
    CreateBoard,
    verb = "create",
    noun = "board",
    description = "Create a new board with default lists"
);

impl CreateBoard {
    /// Create a new CreateBoard command
    pub fn new(title: impl Into<String>, owner: impl Into<UserId>) -> Self {
        Self {
            title: title.into(),
            owner: owner.into(),
        }
    }
}

impl Execute<KanbanContext, KanbanError> for CreateBoard {
    type Output = Board;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Board, KanbanError> {
        let seed = ctx.seeds_sample_cards();

        ctx.mutate_logged(self, |state| {
            let title = require_text("title", &self.title)?;
            let mut board = Board::new(title, self.owner.clone());

            for name in DEFAULT_LISTS {
                board.push_list(name);
            }
            if seed {
                for sample in sample_cards() {
                    let list = &mut board.lists[sample.list_index];
                    let card = Card::new(list.id.clone(), sample.title)
                        .with_description(sample.description);
                    list.push_card(card);
                }
            }

            info!(board = %board.id, owner = %board.user_id, "created board '{}'", board.title);
            state.current_board = Some(board.id.clone());
            state.boards.push(board.clone());
            Ok(Outcome::changed(board.id.clone(), board))
        })
    }
}
