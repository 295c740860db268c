//! Card-level types: Card, Label, LabelColor

use super::ids::{CardId, LabelId, ListId};
use super::position::Positioned;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label colors offered by the UI palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Gray,
}

/// A reusable tag attached to cards by value.
///
/// Labels come from a catalog (see [`crate::defaults::label_catalog`]); the
/// engine never invents label ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    pub title: String,
    pub color: LabelColor,
}

impl Label {
    pub fn new(id: impl Into<LabelId>, title: impl Into<String>, color: LabelColor) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color,
        }
    }
}

/// A task item owned by exactly one list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub position: usize,
    /// Ordered set keyed by label id
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Back-reference to the owning list
    pub list_id: ListId,
}

impl Card {
    /// Create a card for `list_id`; the caller places it with a position
    pub fn new(list_id: ListId, title: impl Into<String>) -> Self {
        Self {
            id: CardId::new(),
            title: title.into(),
            description: None,
            position: 0,
            labels: Vec::new(),
            due_date: None,
            list_id,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Check whether a label with this id is attached
    pub fn has_label(&self, id: &LabelId) -> bool {
        self.labels.iter().any(|l| &l.id == id)
    }

    /// Attach a label unless one with the same id is already present.
    /// Returns true if the card changed.
    pub fn add_label(&mut self, label: Label) -> bool {
        if self.has_label(&label.id) {
            return false;
        }
        self.labels.push(label);
        true
    }

    /// Detach a label by id. Returns true if the card changed.
    pub fn remove_label(&mut self, id: &LabelId) -> bool {
        let before = self.labels.len();
        self.labels.retain(|l| &l.id != id);
        self.labels.len() != before
    }

    /// Replace all labels, keeping the first occurrence of each id
    pub fn set_labels(&mut self, labels: Vec<Label>) {
        self.labels.clear();
        for label in labels {
            self.add_label(label);
        }
    }
}

impl Positioned for Card {
    fn position(&self) -> usize {
        self.position
    }

    fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}
