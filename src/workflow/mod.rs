//! Permission-gated task workflow engine.
//!
//! The engine validates each requested action against the access model and
//! the transition table, then returns a new task value carrying exactly one
//! additional history entry. It never persists or notifies.
//!
//! - Action payloads in [`command`]
//! - Rejection taxonomy in [`error`]
//! - The engine itself in [`engine`]

pub mod command;
pub mod engine;
pub mod error;

pub use command::{NewDocument, TaskCommand, TaskDraft};
pub use engine::{WorkflowEngine, WorkflowSettings, authorize};
pub use error::{RejectionKind, WorkflowError, WorkflowResult};

#[cfg(test)]
mod tests;
