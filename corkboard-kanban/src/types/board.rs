//! Board-level types: Board, List

use super::card::Card;
use super::ids::{BoardId, CardId, ListId, UserId};
use super::position::{self, Positioned};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level aggregate root: owns its lists and, through them, all cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub lists: Vec<List>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Owner, used by collaborators to decide which boards a user sees
    pub user_id: UserId,
}

impl Board {
    /// Create an empty board owned by `user_id`
    pub fn new(title: impl Into<String>, user_id: impl Into<UserId>) -> Self {
        let now = Utc::now();
        Self {
            id: BoardId::new(),
            title: title.into(),
            lists: Vec::new(),
            created_at: now,
            updated_at: now,
            user_id: user_id.into(),
        }
    }

    /// Refresh `updated_at`
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Find a list by ID
    pub fn find_list(&self, id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| &l.id == id)
    }

    /// Index of a list within this board
    pub fn list_index(&self, id: &ListId) -> Option<usize> {
        self.lists.iter().position(|l| &l.id == id)
    }

    /// Append a new list at the end and return its index
    pub fn push_list(&mut self, title: impl Into<String>) -> usize {
        let list = List::new(self.id.clone(), title, self.lists.len());
        self.lists.push(list);
        self.lists.len() - 1
    }

    /// Total number of cards across all lists
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|l| l.cards.len()).sum()
    }

    /// Iterate all cards in list order, then card order
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.lists.iter().flat_map(|l| l.cards.iter())
    }

    /// Check positions and back-references of this board and its lists
    pub fn is_consistent(&self) -> bool {
        position::is_dense(&self.lists)
            && self
                .lists
                .iter()
                .all(|l| l.board_id == self.id && l.is_consistent())
    }
}

/// A named column of a board, owning ordered cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
    pub position: usize,
    /// Back-reference to the owning board
    pub board_id: BoardId,
}

impl List {
    /// Create an empty list
    pub fn new(board_id: BoardId, title: impl Into<String>, position: usize) -> Self {
        Self {
            id: ListId::new(),
            title: title.into(),
            cards: Vec::new(),
            position,
            board_id,
        }
    }

    /// Find a card by ID
    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Index of a card within this list
    pub fn card_index(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == id)
    }

    /// Append a card at the end, taking ownership of it
    pub fn push_card(&mut self, mut card: Card) -> &Card {
        card.list_id = self.id.clone();
        card.position = self.cards.len();
        self.cards.push(card);
        &self.cards[self.cards.len() - 1]
    }

    /// Card titles in order
    pub fn card_titles(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.title.as_str()).collect()
    }

    /// Check card positions and back-references
    pub fn is_consistent(&self) -> bool {
        position::is_dense(&self.cards) && self.cards.iter().all(|c| c.list_id == self.id)
    }
}

impl Positioned for List {
    fn position(&self) -> usize {
        self.position
    }

    fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}
