//! Domain model for the task lifecycle.
//!
//! The task aggregate, its status state machine, and the append-only records
//! it carries. Infrastructure concerns stay outside of this boundary.

mod action;
mod error;
mod filter;
mod ids;
mod records;
mod status;
mod task;

pub use action::{TRANSITIONS, TaskAction, Transition};
pub use error::{
    ParsePriorityError, ParseTaskActionError, ParseTaskStatusError, TaskDomainError,
};
pub use filter::TaskFilter;
pub use ids::TaskId;
pub use records::{Comment, Document, HistoryEntry};
pub use status::{Priority, TaskStatus};
pub use task::{DEFAULT_TASK_TYPE, KNOWN_TASK_TYPES, NewTask, PersistedTaskData, Task};
