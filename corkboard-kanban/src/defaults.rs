//! Built-in content: the lists every new board starts with, the welcome cards
//! and the label catalog offered to the UI.

use crate::types::{Label, LabelColor, LabelId};

/// List titles for a new board
pub const DEFAULT_LISTS: [&str; 3] = ["To Do", "In Progress", "Done"];

/// Titles of the lists created with every board, in order
pub fn default_lists() -> &'static [&'static str] {
    &DEFAULT_LISTS
}

/// A welcome card seeded into a new board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCard {
    /// Index into [`DEFAULT_LISTS`]
    pub list_index: usize,
    pub title: &'static str,
    pub description: &'static str,
}

const SAMPLE_CARDS: [SampleCard; 4] = [
    SampleCard {
        list_index: 0,
        title: "Welcome to Corkboard! 🎉",
        description: "This is your first task card. Click to edit or drag to move between lists.",
    },
    SampleCard {
        list_index: 0,
        title: "Plan your project roadmap",
        description: "Break down your project into smaller, manageable tasks.",
    },
    SampleCard {
        list_index: 1,
        title: "Set up your workspace",
        description: "Configure your development environment and tools.",
    },
    SampleCard {
        list_index: 2,
        title: "Create your Kanban board",
        description: "You've successfully created your first board! Well done! 🚀",
    },
];

/// The welcome cards, in the order they are added
pub fn sample_cards() -> &'static [SampleCard] {
    &SAMPLE_CARDS
}

const CATALOG: [(&str, &str, LabelColor); 15] = [
    ("high-priority", "High Priority", LabelColor::Red),
    ("medium-priority", "Medium Priority", LabelColor::Yellow),
    ("low-priority", "Low Priority", LabelColor::Green),
    ("frontend", "Frontend", LabelColor::Blue),
    ("backend", "Backend", LabelColor::Purple),
    ("design", "Design", LabelColor::Purple),
    ("marketing", "Marketing", LabelColor::Blue),
    ("bug", "Bug", LabelColor::Red),
    ("feature", "Feature", LabelColor::Green),
    ("blocked", "Blocked", LabelColor::Red),
    ("urgent", "Urgent", LabelColor::Red),
    ("review", "Review Needed", LabelColor::Yellow),
    ("research", "Research", LabelColor::Gray),
    ("content", "Content", LabelColor::Blue),
    ("testing", "Testing", LabelColor::Purple),
];

/// The predefined labels cards can be tagged with
pub fn label_catalog() -> Vec<Label> {
    CATALOG
        .iter()
        .map(|(id, title, color)| Label::new(*id, *title, *color))
        .collect()
}

/// Look up a catalog label by id
pub fn catalog_label(id: &LabelId) -> Option<Label> {
    CATALOG
        .iter()
        .find(|(catalog_id, _, _)| *catalog_id == id.as_str())
        .map(|(id, title, color)| Label::new(*id, *title, *color))
}
