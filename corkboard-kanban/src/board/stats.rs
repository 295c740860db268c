//! Board statistics

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::types::{Board, BoardId, Card};
use chrono::{DateTime, Utc};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Lists whose title contains one of these count as finished work
const COMPLETED_KEYWORDS: [&str; 5] = ["done", "complete", "resolved", "published", "launch"];

/// Label titles containing one of these mark a card as high priority
const HIGH_PRIORITY_KEYWORDS: [&str; 2] = ["high", "urgent"];

/// Summary counts for one board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    pub total_lists: usize,
    pub total_cards: usize,
    pub completed_cards: usize,
    /// Percentage of cards in completed lists, 0 for an empty board
    pub completion_rate: f64,
    pub overdue_cards: usize,
    pub due_today_cards: usize,
    pub high_priority_cards: usize,
    pub updated_at: DateTime<Utc>,
}

impl BoardStats {
    /// Compute statistics for `board` as of `now`
    pub fn compute(board: &Board, now: DateTime<Utc>) -> Self {
        let total_cards = board.card_count();
        let completed_cards = board
            .lists
            .iter()
            .filter(|list| {
                let title = list.title.to_lowercase();
                COMPLETED_KEYWORDS.iter().any(|k| title.contains(k))
            })
            .map(|list| list.cards.len())
            .sum();

        let due_dates = || board.cards().filter_map(|c| c.due_date);
        let overdue_cards = due_dates().filter(|due| *due < now).count();
        let due_today_cards = due_dates()
            .filter(|due| due.date_naive() == now.date_naive())
            .count();

        let completion_rate = if total_cards == 0 {
            0.0
        } else {
            completed_cards as f64 / total_cards as f64 * 100.0
        };

        Self {
            total_lists: board.lists.len(),
            total_cards,
            completed_cards,
            completion_rate,
            overdue_cards,
            due_today_cards,
            high_priority_cards: board.cards().filter(|c| is_high_priority(c)).count(),
            updated_at: board.updated_at,
        }
    }
}

fn is_high_priority(card: &Card) -> bool {
    card.labels.iter().any(|label| {
        let title = label.title.to_lowercase();
        HIGH_PRIORITY_KEYWORDS.iter().any(|k| title.contains(k))
    })
}

/// Compute [`BoardStats`] for a board
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBoardStats {
    pub id: BoardId,
    /// Reference time for due-date counts; the current time when unset
    pub now: Option<DateTime<Utc>>,
}

operation!(
    GetBoardStats,
    verb = "get",
    noun = "board stats",
    description = "Compute summary statistics for a board"
);

impl GetBoardStats {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self {
            id: id.into(),
            now: None,
        }
    }

    /// Evaluate due dates relative to `now`
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }
}

impl Execute<KanbanContext, KanbanError> for GetBoardStats {
    type Output = BoardStats;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<BoardStats, KanbanError> {
        let now = self.now.unwrap_or_else(Utc::now);
        let result = ctx.read(|state| {
            state
                .board(&self.id)
                .map(|board| BoardStats::compute(board, now))
                .ok_or_else(|| KanbanError::BoardNotFound {
                    id: self.id.to_string(),
                })
        });
        ExecutionResult::unlogged(result)
    }
}
