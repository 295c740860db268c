//! Label commands
//!
//! Labels are embedded in cards by value. Attaching is idempotent by label id
//! and detaching an absent label changes nothing.

mod add;
mod remove;

pub use add::AddLabel;
pub use remove::RemoveLabel;
