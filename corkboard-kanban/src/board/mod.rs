//! Board commands

mod create;
mod current;
mod delete;
mod get;
mod stats;
mod update;

pub use create::CreateBoard;
pub use current::{GetCurrentBoard, SetCurrentBoard};
pub use delete::DeleteBoard;
pub use get::{GetBoard, ListBoards};
pub use stats::{BoardStats, GetBoardStats};
pub use update::UpdateBoard;
