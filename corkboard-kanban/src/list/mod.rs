//! List commands

mod create;
mod delete;
mod get;
mod mv;
mod update;

pub use create::CreateList;
pub use delete::DeleteList;
pub use get::GetList;
pub use mv::MoveList;
pub use update::UpdateList;
