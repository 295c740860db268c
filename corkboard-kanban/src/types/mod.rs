//! Core types for the kanban engine

mod board;
mod card;
mod ids;
pub mod position;
mod snapshot;

// Re-export all types
pub use board::{Board, List};
pub use card::{Card, Label, LabelColor};
pub use ids::{BoardId, CardId, LabelId, ListId, UserId};
pub use position::Positioned;
pub use snapshot::KanbanSnapshot;
