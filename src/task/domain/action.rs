//! Task actions and the status transition table.

use super::{ParseTaskActionError, TaskStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an action that can be recorded against a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskAction {
    /// Task construction. Only ever recorded as the first history entry.
    #[serde(rename = "createTask")]
    Create,
    /// Distribute a created task to employees.
    #[serde(rename = "assignTask")]
    Assign,
    /// Take an assigned task into progress.
    #[serde(rename = "acceptTask")]
    Accept,
    /// Pause work in progress.
    #[serde(rename = "pauseTask")]
    Pause,
    /// Resume paused work.
    #[serde(rename = "resumeTask")]
    Resume,
    /// Send the task back to its author.
    #[serde(rename = "sendToRework")]
    SendToRework,
    /// Return a reworked task to the employees.
    #[serde(rename = "returnToWork")]
    ReturnToWork,
    /// Submit finished work for approval.
    #[serde(rename = "sendToApproval")]
    SendToApproval,
    /// Approve finished work.
    #[serde(rename = "approveTask")]
    Approve,
    /// Reject submitted work back to the employees.
    #[serde(rename = "returnToEmployee")]
    ReturnToEmployee,
    /// Attach a document.
    #[serde(rename = "attachDocument")]
    AttachDocument,
    /// Add a free-text comment.
    #[serde(rename = "addComment")]
    AddComment,
    /// Change the priority.
    #[serde(rename = "changePriority")]
    ChangePriority,
    /// Change the due date.
    #[serde(rename = "changeDeadline")]
    ChangeDeadline,
    /// Replace the assignees without touching the status.
    #[serde(rename = "splitTask")]
    Split,
}

impl TaskAction {
    /// Every action that can be invoked on an existing task, in menu order.
    pub const ALL: [Self; 14] = [
        Self::Assign,
        Self::Accept,
        Self::Pause,
        Self::Resume,
        Self::SendToRework,
        Self::ReturnToWork,
        Self::SendToApproval,
        Self::Approve,
        Self::ReturnToEmployee,
        Self::AttachDocument,
        Self::AddComment,
        Self::ChangePriority,
        Self::ChangeDeadline,
        Self::Split,
    ];

    /// Returns the canonical action identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "createTask",
            Self::Assign => "assignTask",
            Self::Accept => "acceptTask",
            Self::Pause => "pauseTask",
            Self::Resume => "resumeTask",
            Self::SendToRework => "sendToRework",
            Self::ReturnToWork => "returnToWork",
            Self::SendToApproval => "sendToApproval",
            Self::Approve => "approveTask",
            Self::ReturnToEmployee => "returnToEmployee",
            Self::AttachDocument => "attachDocument",
            Self::AddComment => "addComment",
            Self::ChangePriority => "changePriority",
            Self::ChangeDeadline => "changeDeadline",
            Self::Split => "splitTask",
        }
    }

    /// Returns the audit label written to history.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => "Created",
            Self::Assign => "Assigned",
            Self::Accept => "Accepted",
            Self::Pause => "Paused",
            Self::Resume => "Resumed",
            Self::SendToRework => "Sent to rework",
            Self::ReturnToWork => "Returned to work",
            Self::SendToApproval => "Sent for approval",
            Self::Approve => "Approved",
            Self::ReturnToEmployee => "Returned to employee",
            Self::AttachDocument => "Document attached",
            Self::AddComment => "Comment added",
            Self::ChangePriority => "Priority changed",
            Self::ChangeDeadline => "Deadline changed",
            Self::Split => "Task split",
        }
    }

    /// Returns whether the action moves the task along the transition table.
    #[must_use]
    pub fn is_status_transition(self) -> bool {
        TRANSITIONS.iter().any(|transition| transition.action == self)
    }

    /// Returns whether the action must carry a non-empty comment.
    #[must_use]
    pub const fn requires_comment(self) -> bool {
        matches!(
            self,
            Self::Pause | Self::SendToRework | Self::ReturnToEmployee | Self::AddComment
        )
    }

    /// Returns the status reached by applying the action in `from`.
    ///
    /// Side mutations keep any non-terminal status. `None` means the action
    /// is not a legal edge from `from`.
    #[must_use]
    pub fn target_status(self, from: TaskStatus) -> Option<TaskStatus> {
        if self == Self::Create {
            return None;
        }
        if self.is_status_transition() {
            return TRANSITIONS
                .iter()
                .find(|transition| transition.from == from && transition.action == self)
                .map(|transition| transition.to);
        }
        (!from.is_terminal()).then_some(from)
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskAction {
    type Err = ParseTaskActionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed == Self::Create.as_str() {
            return Ok(Self::Create);
        }
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == trimmed)
            .ok_or_else(|| ParseTaskActionError(value.to_owned()))
    }
}

/// One legal edge of the status state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Status the edge leaves.
    pub from: TaskStatus,
    /// Action that triggers the edge.
    pub action: TaskAction,
    /// Status the edge enters.
    pub to: TaskStatus,
}

impl Transition {
    const fn new(from: TaskStatus, action: TaskAction, to: TaskStatus) -> Self {
        Self { from, action, to }
    }
}

/// Every legal status-changing edge. Pairs absent from this table are illegal.
pub const TRANSITIONS: [Transition; 9] = [
    Transition::new(TaskStatus::Created, TaskAction::Assign, TaskStatus::Assigned),
    Transition::new(TaskStatus::Assigned, TaskAction::Accept, TaskStatus::InProgress),
    Transition::new(TaskStatus::InProgress, TaskAction::Pause, TaskStatus::Paused),
    Transition::new(TaskStatus::InProgress, TaskAction::SendToRework, TaskStatus::Rework),
    Transition::new(TaskStatus::InProgress, TaskAction::SendToApproval, TaskStatus::Approval),
    Transition::new(TaskStatus::Paused, TaskAction::Resume, TaskStatus::InProgress),
    Transition::new(TaskStatus::Rework, TaskAction::ReturnToWork, TaskStatus::InProgress),
    Transition::new(TaskStatus::Approval, TaskAction::Approve, TaskStatus::Approved),
    Transition::new(TaskStatus::Approval, TaskAction::ReturnToEmployee, TaskStatus::InProgress),
];
