//! Card commands

mod create;
mod delete;
mod get;
mod mv;
mod update;

pub use create::CreateCard;
pub use delete::DeleteCard;
pub use get::GetCard;
pub use mv::MoveCard;
pub use update::UpdateCard;
