//! Kanban board engine
//!
//! This crate holds the canonical board → list → card aggregate of a Corkboard
//! installation and every operation that changes it.
//!
//! ## Overview
//!
//! - **Single writer** - [`KanbanContext`] serializes mutations; each one is applied
//!   to a working copy and committed only if it fully succeeds
//! - **Dense ordering** - list and card `position`s are always `0..n` within their parent
//! - **Command structs** - every operation is a struct implementing [`Execute`]
//! - **Observable** - subscribers receive a [`ChangeEvent`] after every committed change
//!
//! ## Basic Usage
//!
//! ```rust
//! use corkboard_kanban::{board::CreateBoard, card::{CreateCard, MoveCard}, Execute, KanbanContext};
//!
//! # fn example() -> Result<(), corkboard_kanban::KanbanError> {
//! let ctx = KanbanContext::new();
//! let board = CreateBoard::new("Launch", "user-1").execute(&ctx).into_result()?;
//!
//! let todo = &board.lists[0];
//! let done = &board.lists[2];
//! let card = CreateCard::new(todo.id.clone(), "Write release notes")
//!     .execute(&ctx)
//!     .into_result()?;
//!
//! MoveCard::new(card.id, done.id.clone(), 0).execute(&ctx).into_result()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Persistence
//!
//! A context opened with [`KanbanContext::open`] writes the whole aggregate as
//! pretty JSON after every committed mutation:
//!
//! ```text
//! {
//!   "boards": [ { "id", "title", "lists": [ { ..., "cards": [ ... ] } ], "createdAt", ... } ],
//!   "currentBoard": "01J..."
//! }
//! ```

mod context;
pub mod defaults;
mod error;
mod processor;
pub mod types;

#[cfg(test)]
mod test_support;

// Command modules
pub mod board;
pub mod card;
pub mod label;
pub mod list;

pub use corkboard_operations::{Execute, ExecutionResult, LogEntry, Operation, OperationProcessor};

pub use context::{ChangeEvent, KanbanContext, Outcome};
pub use error::{KanbanError, Result};
pub use processor::KanbanOperationProcessor;

// Re-export commonly used types
pub use types::{
    Board, BoardId, Card, CardId, KanbanSnapshot, Label, LabelColor, LabelId, List, ListId,
    UserId,
};
