//! # Corkboard Operations
//!
//! Operations are structs whose fields are their parameters. Each operation
//! names itself with a verb/noun pair and is executed synchronously against a
//! context type chosen by the domain crate.
//!
//! ## Example
//!
//! ```ignore
//! use corkboard_operations::{operation, Execute, ExecutionResult};
//!
//! #[derive(Debug, Serialize)]
//! pub struct CreateCard {
//!     pub list_id: ListId,
//!     pub title: String,
//! }
//!
//! operation!(CreateCard, verb = "create", noun = "card", description = "Create a card");
//!
//! impl Execute<KanbanContext, KanbanError> for CreateCard {
//!     type Output = Card;
//!
//!     fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Card, KanbanError> {
//!         // returns ExecutionResult::Logged, Unlogged or Failed
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use processor::OperationProcessor;

// Re-export for use in implementations
pub use serde_json::Value;
