//! The whole aggregate: every board plus the session's current board.
//!
//! This is both the in-memory state held by the context and the persisted
//! document shape.

use super::board::{Board, List};
use super::card::Card;
use super::ids::{BoardId, CardId, ListId, UserId};
use super::position::{self, Positioned};
use serde::{Deserialize, Serialize};

/// Boards → lists → cards, plus the current board selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanSnapshot {
    #[serde(default)]
    pub boards: Vec<Board>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_board: Option<BoardId>,
}

impl KanbanSnapshot {
    /// Find a board by ID
    pub fn board(&self, id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| &b.id == id)
    }

    /// Find a board by ID, mutably
    pub fn board_mut(&mut self, id: &BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|b| &b.id == id)
    }

    /// Boards owned by `user`, in store order
    pub fn boards_for<'a>(&'a self, user: &'a UserId) -> impl Iterator<Item = &'a Board> + 'a {
        self.boards.iter().filter(move |b| &b.user_id == user)
    }

    /// (board index, list index) of a list
    pub fn locate_list(&self, id: &ListId) -> Option<(usize, usize)> {
        self.boards
            .iter()
            .enumerate()
            .find_map(|(b, board)| board.list_index(id).map(|l| (b, l)))
    }

    /// (board index, list index, card index) of a card
    pub fn locate_card(&self, id: &CardId) -> Option<(usize, usize, usize)> {
        self.boards.iter().enumerate().find_map(|(b, board)| {
            board
                .lists
                .iter()
                .enumerate()
                .find_map(|(l, list)| list.card_index(id).map(|c| (b, l, c)))
        })
    }

    /// Find a list by ID anywhere in the aggregate
    pub fn list(&self, id: &ListId) -> Option<&List> {
        self.locate_list(id).map(|(b, l)| &self.boards[b].lists[l])
    }

    /// Find a card by ID anywhere in the aggregate
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.locate_card(id)
            .map(|(b, l, c)| &self.boards[b].lists[l].cards[c])
    }

    /// Total number of cards across all boards
    pub fn card_count(&self) -> usize {
        self.boards.iter().map(Board::card_count).sum()
    }

    /// Check every board's ordering and back-references
    pub fn is_consistent(&self) -> bool {
        self.boards.iter().all(Board::is_consistent)
    }

    /// Restore dense positions and back-references.
    ///
    /// Siblings are first sorted by their stored position (stable, so equal
    /// positions keep document order), then renumbered. A current board that
    /// no longer exists is cleared. Returns true if anything changed.
    pub fn normalize(&mut self) -> bool {
        let before = self.clone();

        for board in &mut self.boards {
            board.lists.sort_by_key(|l| l.position());
            position::renumber(&mut board.lists);
            for list in &mut board.lists {
                list.board_id = board.id.clone();
                list.cards.sort_by_key(|c| c.position());
                position::renumber(&mut list.cards);
                for card in &mut list.cards {
                    card.list_id = list.id.clone();
                }
            }
        }

        if let Some(current) = &self.current_board {
            if self.board(current).is_none() {
                self.current_board = None;
            }
        }

        *self != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KanbanSnapshot {
        let mut board = Board::new("Launch", "user-1");
        board.push_list("To Do");
        board.push_list("Done");
        let todo = board.lists[0].id.clone();
        board.lists[0].push_card(Card::new(todo.clone(), "A"));
        board.lists[0].push_card(Card::new(todo, "B"));
        KanbanSnapshot {
            current_board: Some(board.id.clone()),
            boards: vec![board],
        }
    }

    #[test]
    fn test_locate_card() {
        let snapshot = sample();
        let id = snapshot.boards[0].lists[0].cards[1].id.clone();
        assert_eq!(snapshot.locate_card(&id), Some((0, 0, 1)));
        assert_eq!(snapshot.card(&id).unwrap().title, "B");
        assert!(snapshot.locate_card(&CardId::new()).is_none());
    }

    #[test]
    fn test_boards_for_filters_owner() {
        let mut snapshot = sample();
        snapshot.boards.push(Board::new("Other", "user-2"));
        let owner = UserId::from("user-2");
        let titles: Vec<&str> = snapshot
            .boards_for(&owner)
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Other"]);
    }

    #[test]
    fn test_normalize_repairs_positions() {
        let mut snapshot = sample();
        assert!(snapshot.is_consistent());
        assert!(!snapshot.normalize());

        // Gap and swapped order
        snapshot.boards[0].lists[0].cards[0].position = 7;
        snapshot.boards[0].lists[0].cards[1].position = 2;
        snapshot.boards[0].lists[1].board_id = BoardId::new();
        assert!(!snapshot.is_consistent());

        assert!(snapshot.normalize());
        assert!(snapshot.is_consistent());
        assert_eq!(snapshot.boards[0].lists[0].card_titles(), vec!["B", "A"]);
    }

    #[test]
    fn test_normalize_clears_dangling_current_board() {
        let mut snapshot = sample();
        snapshot.current_board = Some(BoardId::new());
        assert!(snapshot.normalize());
        assert!(snapshot.current_board.is_none());
    }
}
