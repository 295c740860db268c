//! The `Operation` metadata trait and the `Execute` trait

use crate::ExecutionResult;
use serde::Serialize;

/// Metadata every operation carries: what it does and to what.
pub trait Operation {
    /// The action, e.g. "create", "move"
    fn verb(&self) -> &'static str;

    /// The entity acted upon, e.g. "card", "list"
    fn noun(&self) -> &'static str;

    /// Human readable description
    fn description(&self) -> &'static str;

    /// Canonical op string used in activity logs ("move card")
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Execute an operation against a context.
///
/// Execution is synchronous: by the time `execute` returns, the context has
/// either fully applied the operation or is unchanged.
pub trait Execute<C, E>: Operation {
    /// The value produced on success
    type Output: Serialize;

    fn execute(&self, ctx: &C) -> ExecutionResult<Self::Output, E>;
}

/// Implement [`Operation`] for a struct.
///
/// ```ignore
/// operation!(DeleteList, verb = "delete", noun = "list", description = "Delete a list and its cards");
/// ```
#[macro_export]
macro_rules! operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $desc:literal) => {
        impl $crate::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $desc
            }
        }
    };
}
