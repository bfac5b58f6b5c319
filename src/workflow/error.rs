//! Structured rejections returned by the workflow engine.

use crate::access::domain::Capability;
use crate::access::policy::OwnershipRequirement;
use crate::task::domain::{TaskAction, TaskDomainError, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for workflow engine operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Rejection of a requested action. The task is never partially mutated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    /// The actor's role lacks the capability for the action.
    #[error("permission denied: '{action}' requires '{capability}'")]
    PermissionDenied {
        /// Requested action.
        action: TaskAction,
        /// First capability that would unlock the action.
        capability: Capability,
    },

    /// The action is not a legal edge from the task's current status.
    #[error("illegal transition: '{action}' is not allowed from '{from}' on task {task_id}")]
    IllegalTransition {
        /// Task the action targeted.
        task_id: TaskId,
        /// Status the task was in.
        from: TaskStatus,
        /// Requested action.
        action: TaskAction,
    },

    /// The actor lacks the task-specific relationship the action demands.
    #[error("ownership violation: '{action}' on task {task_id} requires {requirement}")]
    OwnershipViolation {
        /// Task the action targeted.
        task_id: TaskId,
        /// Requested action.
        action: TaskAction,
        /// Relationship that was not satisfied.
        requirement: OwnershipRequirement,
    },

    /// The action mandates a non-empty comment.
    #[error("'{action}' requires a comment")]
    CommentRequired {
        /// Requested action.
        action: TaskAction,
    },

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The actor or an actor referenced by the payload is unusable.
    #[error("invalid actor: {0}")]
    ActorInvalid(String),

    /// Task field values failed domain validation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}

impl WorkflowError {
    /// Returns the fieldless kind of the rejection.
    #[must_use]
    pub const fn kind(&self) -> RejectionKind {
        match self {
            Self::PermissionDenied { .. } => RejectionKind::PermissionDenied,
            Self::IllegalTransition { .. } => RejectionKind::IllegalTransition,
            Self::OwnershipViolation { .. } => RejectionKind::OwnershipViolation,
            Self::CommentRequired { .. } => RejectionKind::CommentRequired,
            Self::TaskNotFound(_) => RejectionKind::TaskNotFound,
            Self::ActorInvalid(_) => RejectionKind::ActorInvalid,
            Self::Domain(_) => RejectionKind::InvalidInput,
        }
    }
}

/// Kind of a [`WorkflowError`], for callers mapping rejections to messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// See [`WorkflowError::PermissionDenied`].
    PermissionDenied,
    /// See [`WorkflowError::IllegalTransition`].
    IllegalTransition,
    /// See [`WorkflowError::OwnershipViolation`].
    OwnershipViolation,
    /// See [`WorkflowError::CommentRequired`].
    CommentRequired,
    /// See [`WorkflowError::TaskNotFound`].
    TaskNotFound,
    /// See [`WorkflowError::ActorInvalid`].
    ActorInvalid,
    /// See [`WorkflowError::Domain`].
    InvalidInput,
}

impl From<crate::access::domain::AccessDomainError> for WorkflowError {
    fn from(err: crate::access::domain::AccessDomainError) -> Self {
        Self::ActorInvalid(err.to_string())
    }
}
