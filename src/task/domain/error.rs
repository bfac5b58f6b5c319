//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or reconstructing task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty or contains whitespace.
    #[error("invalid task identifier '{0}'")]
    InvalidTaskId(String),

    /// The task identifier prefix is empty or not alphanumeric.
    #[error("invalid task identifier prefix '{0}', expected ASCII letters or digits")]
    InvalidTaskIdPrefix(String),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The attached document has no name.
    #[error("document name must not be empty")]
    EmptyDocumentName,

    /// The persisted history has no creation record.
    #[error("task {0} has no creation record")]
    MissingCreationRecord(TaskId),

    /// The last history entry disagrees with the task status.
    #[error("task {task_id} history ends in '{recorded}' but status is '{status}'")]
    HistoryStatusMismatch {
        /// Task whose history is inconsistent.
        task_id: TaskId,
        /// Status recorded by the last history entry.
        recorded: TaskStatus,
        /// Status stored on the task.
        status: TaskStatus,
    },

    /// History timestamps decrease somewhere in the log.
    #[error("task {0} history is not time-ordered")]
    HistoryOutOfOrder(TaskId),

    /// `created_at` or `updated_at` disagrees with the history timestamps.
    #[error("task {0} timestamps are out of step with its history")]
    TimestampsOutOfStep(TaskId),

    /// A task past the created state has nobody assigned.
    #[error("task {task_id} in status '{status}' has no assignees")]
    MissingAssignees {
        /// Task with an empty assignment.
        task_id: TaskId,
        /// Status that requires assignees.
        status: TaskStatus,
    },
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing task action identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task action: {0}")]
pub struct ParseTaskActionError(pub String);
