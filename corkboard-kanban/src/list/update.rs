//! UpdateList command

use crate::context::{KanbanContext, Outcome};
use crate::error::{require_text, KanbanError};
use crate::types::{List, ListId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Update list properties. An unknown list is left alone and yields `None`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateList {
    pub id: ListId,
    pub title: Option<String>,
}

operation!(
    UpdateList,
    verb = "update",
    noun = "list",
    description = "Update list properties"
);

impl UpdateList {
    pub fn new(id: impl Into<ListId>) -> Self {
        Self {
            id: id.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Execute<KanbanContext, KanbanError> for UpdateList {
    type Output = Option<List>;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Option<List>, KanbanError> {
        ctx.mutate_logged(self, |state| {
            let title = self
                .title
                .as_deref()
                .map(|t| require_text("title", t))
                .transpose()?;

            let Some((b, l)) = state.locate_list(&self.id) else {
                return Ok(Outcome::unchanged(None));
            };

            let board = &mut state.boards[b];
            if let Some(title) = title {
                board.lists[l].title = title;
            }
            board.touch();
            Ok(Outcome::changed(
                board.id.clone(),
                Some(board.lists[l].clone()),
            ))
        })
    }
}
