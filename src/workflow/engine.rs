//! The task status state machine and its uniform action protocol.

use super::{NewDocument, TaskCommand, TaskDraft, WorkflowError, WorkflowResult};
use crate::access::domain::{Actor, ActorId};
use crate::access::policy::{
    can_invoke, ownership_requirement, primary_capability, satisfies,
};
use crate::task::domain::{
    Comment, DEFAULT_TASK_TYPE, Document, HistoryEntry, NewTask, Priority, Task, TaskAction,
    TaskDomainError, TaskId, TaskStatus,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Tunables applied by the engine when creating tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSettings {
    default_task_type: String,
}

impl WorkflowSettings {
    /// Creates settings with the given default task type.
    #[must_use]
    pub fn new(default_task_type: impl Into<String>) -> Self {
        Self {
            default_task_type: default_task_type.into(),
        }
    }

    /// Returns the task type used when a draft names none.
    #[must_use]
    pub fn default_task_type(&self) -> &str {
        &self.default_task_type
    }
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self::new(DEFAULT_TASK_TYPE)
    }
}

/// Checks capability, transition legality, and ownership for an action, in
/// that order, and returns the status the task would reach.
///
/// # Errors
///
/// Returns [`WorkflowError::PermissionDenied`],
/// [`WorkflowError::IllegalTransition`], or
/// [`WorkflowError::OwnershipViolation`] for the first failing check.
pub fn authorize(actor: &Actor, task: &Task, action: TaskAction) -> WorkflowResult<TaskStatus> {
    if !can_invoke(actor, action) {
        return Err(WorkflowError::PermissionDenied {
            action,
            capability: primary_capability(action),
        });
    }

    let target = action
        .target_status(task.status())
        .ok_or_else(|| WorkflowError::IllegalTransition {
            task_id: task.id().clone(),
            from: task.status(),
            action,
        })?;

    if let Some(requirement) = ownership_requirement(action) {
        if !satisfies(actor, task, requirement) {
            return Err(WorkflowError::OwnershipViolation {
                task_id: task.id().clone(),
                action,
                requirement,
            });
        }
    }

    Ok(target)
}

/// Checks the payload of a command: mandatory comments, non-empty employee
/// lists, named documents.
fn validate_payload(command: &TaskCommand) -> WorkflowResult<()> {
    let action = command.action();
    if action.requires_comment() && command.supplied_comment().is_none() {
        return Err(WorkflowError::CommentRequired { action });
    }

    match command {
        TaskCommand::Assign { employees, .. } | TaskCommand::Split { employees, .. }
            if employees.is_empty() =>
        {
            Err(WorkflowError::ActorInvalid(format!(
                "'{action}' needs at least one employee"
            )))
        }
        TaskCommand::AttachDocument { document } if document.name.trim().is_empty() => {
            Err(TaskDomainError::EmptyDocumentName.into())
        }
        _ => Ok(()),
    }
}

fn join_ids(ids: &[ActorId]) -> String {
    ids.iter()
        .map(ActorId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_due_date(due_date: Option<NaiveDate>) -> String {
    due_date.map_or_else(|| "unset".to_owned(), |date| date.to_string())
}

/// Permission-gated state machine over task aggregates.
///
/// Every action is a pure function from the current task value to a new
/// one. The engine holds only a clock and settings, never caller-owned
/// collections, so it is stateless between calls.
#[derive(Debug)]
pub struct WorkflowEngine<C: Clock> {
    clock: Arc<C>,
    settings: WorkflowSettings,
}

impl<C: Clock> Clone for WorkflowEngine<C> {
    fn clone(&self) -> Self {
        Self {
            clock: Arc::clone(&self.clock),
            settings: self.settings.clone(),
        }
    }
}

impl<C: Clock> WorkflowEngine<C> {
    /// Creates an engine with default settings.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_settings(clock, WorkflowSettings::default())
    }

    /// Creates an engine with explicit settings.
    #[must_use]
    pub const fn with_settings(clock: Arc<C>, settings: WorkflowSettings) -> Self {
        Self { clock, settings }
    }

    /// Returns the engine settings.
    #[must_use]
    pub const fn settings(&self) -> &WorkflowSettings {
        &self.settings
    }

    /// Creates a task in the `created` status, recording the creation entry.
    ///
    /// The region defaults to the creator's own; actors without a region
    /// must name one in the draft.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::PermissionDenied`] without `createTask`,
    /// [`WorkflowError::ActorInvalid`] when no region can be resolved, or
    /// [`WorkflowError::Domain`] for a blank title.
    pub fn create_task(&self, actor: &Actor, id: TaskId, draft: TaskDraft) -> WorkflowResult<Task> {
        if !can_invoke(actor, TaskAction::Create) {
            return Err(WorkflowError::PermissionDenied {
                action: TaskAction::Create,
                capability: primary_capability(TaskAction::Create),
            });
        }

        let region = draft
            .region
            .or_else(|| actor.region().cloned())
            .ok_or_else(|| {
                WorkflowError::ActorInvalid(format!(
                    "actor {} has no region and the draft names none",
                    actor.identifier()
                ))
            })?;
        let task_type = draft
            .task_type
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| self.settings.default_task_type.clone());

        let data = NewTask {
            id,
            region,
            task_type,
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            due_date: draft.due_date,
        };
        let task = Task::new(data, actor, self.clock.utc())?;

        info!(
            task_id = %task.id(),
            region = %task.region(),
            actor = %actor.identifier(),
            "task created"
        );
        Ok(task)
    }

    /// Applies a command to the task and returns the new task value.
    ///
    /// Validation completes before any mutation, so a rejected command
    /// leaves nothing behind. A successful command appends exactly one
    /// history entry whose resulting status is the task's new status.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as a [`WorkflowError`]:
    /// capability, transition legality, ownership, then payload.
    pub fn execute(
        &self,
        actor: &Actor,
        task: &Task,
        command: TaskCommand,
    ) -> WorkflowResult<Task> {
        let action = command.action();
        let checked = authorize(actor, task, action)
            .and_then(|target| validate_payload(&command).map(|()| target));
        let target = match checked {
            Ok(status) => status,
            Err(err) => {
                info!(
                    task_id = %task.id(),
                    action = %action,
                    actor = %actor.identifier(),
                    kind = ?err.kind(),
                    "action rejected"
                );
                return Err(err);
            }
        };

        let timestamp = self.next_timestamp(task);
        let mut next = task.clone();
        let comment = apply_payload(&mut next, actor, command, timestamp);
        let mut entry = HistoryEntry::new(actor, action, comment, target, timestamp);
        if matches!(action, TaskAction::Assign | TaskAction::Split) {
            entry = entry.with_assignees(next.assigned_to());
        }
        next.record(entry);

        debug!(
            task_id = %next.id(),
            action = %action,
            actor = %actor.identifier(),
            from = %task.status(),
            to = %next.status(),
            "action applied"
        );
        Ok(next)
    }

    /// Assigns a created task to employees.
    ///
    /// # Errors
    ///
    /// See [`WorkflowEngine::execute`].
    pub fn assign_task(
        &self,
        actor: &Actor,
        task: &Task,
        employees: Vec<ActorId>,
        comment: Option<&str>,
    ) -> WorkflowResult<Task> {
        let command = TaskCommand::Assign {
            employees,
            comment: comment.map(str::to_owned),
        };
        self.execute(actor, task, command)
    }

    /// Accepts an assigned task into progress.
    ///
    /// # Errors
    ///
    /// See [`WorkflowEngine::execute`].
    pub fn accept_task(
        &self,
        actor: &Actor,
        task: &Task,
        comment: Option<&str>,
    ) -> WorkflowResult<Task> {
        let command = TaskCommand::Accept {
            comment: comment.map(str::to_owned),
        };
        self.execute(actor, task, command)
    }

    /// Pauses work in progress; the comment is mandatory.
    ///
    /// # Errors
    ///
    /// See [`WorkflowEngine::execute`].
    pub fn pause_task(&self, actor: &Actor, task: &Task, comment: &str) -> WorkflowResult<Task> {
        let command = TaskCommand::Pause {
            comment: Some(comment.to_owned()),
        };
        self.execute(actor, task, command)
    }

    /// Resumes paused work.
    ///
    /// # Errors
    ///
    /// See [`WorkflowEngine::execute`].
    pub fn resume_task(
        &self,
        actor: &Actor,
        task: &Task,
        comment: Option<&str>,
    ) -> WorkflowResult<Task> {
        let command = TaskCommand::Resume {
            comment: comment.map(str::to_owned),
        };
        self.execute(actor, task, command)
    }

    /// Sends the task back to its author; the comment is mandatory.
    ///
    /// # Errors
    ///
    /// See [`WorkflowEngine::execute`].
    pub fn send_to_rework(
        &self,
        actor: &Actor,
        task: &Task,
        comment: &str,
    ) -> WorkflowResult<Task> {
        let command = TaskCommand::SendToRework {
            comment: Some(comment.to_owned()),
        };
        self.execute(actor, task, command)
    }

    /// Returns a reworked task to the employees.
    ///
    /// # Errors
    ///
    /// See [`WorkflowEngine::execute`].
    pub fn return_to_work(
        &self,
        actor: &Actor,
        task: &Task,
        comment: Option<&str>,
    ) -> WorkflowResult<Task> {
        let command = TaskCommand::ReturnToWork {
            comment: comment.map(str::to_owned),
        };
        self.execute(actor, task, command)
    }

    /// Submits finished work for approval.
    ///
    /// # Errors
    ///
    /// See [`WorkflowEngine::execute`].
    pub fn send_to_approval(
        &self,
        actor: &Actor,
        task: &Task,
        comment: Option<&str>,
    ) -> WorkflowResult<Task> {
        let command = TaskCommand::SendToApproval {
            comment: comment.map(str::to_owned),
        };
        self.execute(actor, task, command)
    }

    /// Approves finished work.
    ///
    /// # Errors
    ///
    /// See [`WorkflowEngine::execute`].
    pub fn approve_task(
        &self,
        actor: &Actor,
        task: &Task,
        comment: Option<&str>,
    ) -> WorkflowResult<Task> {
        let command = TaskCommand::Approve {
            comment: comment.map(str::to_owned),
        };
        self.execute(actor, task, command)
    }

    /// Returns submitted work to the employees; the comment is mandatory.
    ///
    /// # Errors
    ///
    /// See [`WorkflowEngine::execute`].
    pub fn return_to_employee(
        &self,
        actor: &Actor,
        task: &Task,
        comment: &str,
    ) -> WorkflowResult<Task> {
        let command = TaskCommand::ReturnToEmployee {
            comment: Some(comment.to_owned()),
        };
        self.execute(actor, task, command)
    }

    /// Attaches a document.
    ///
    /// # Errors
    ///
    /// See [`WorkflowEngine::execute`].
    pub fn attach_document(
        &self,
        actor: &Actor,
        task: &Task,
        document: NewDocument,
    ) -> WorkflowResult<Task> {
        self.execute(actor, task, TaskCommand::AttachDocument { document })
    }

    /// Adds a comment.
    ///
    /// # Errors
    ///
    /// See [`WorkflowEngine::execute`].
    pub fn add_comment(&self, actor: &Actor, task: &Task, text: &str) -> WorkflowResult<Task> {
        let command = TaskCommand::AddComment {
            text: text.to_owned(),
        };
        self.execute(actor, task, command)
    }

    /// Changes the priority without touching the status.
    ///
    /// # Errors
    ///
    /// See [`WorkflowEngine::execute`].
    pub fn change_priority(
        &self,
        actor: &Actor,
        task: &Task,
        priority: Priority,
        comment: Option<&str>,
    ) -> WorkflowResult<Task> {
        let command = TaskCommand::ChangePriority {
            priority,
            comment: comment.map(str::to_owned),
        };
        self.execute(actor, task, command)
    }

    /// Changes the due date without touching the status.
    ///
    /// # Errors
    ///
    /// See [`WorkflowEngine::execute`].
    pub fn change_deadline(
        &self,
        actor: &Actor,
        task: &Task,
        due_date: NaiveDate,
        comment: Option<&str>,
    ) -> WorkflowResult<Task> {
        let command = TaskCommand::ChangeDeadline {
            due_date,
            comment: comment.map(str::to_owned),
        };
        self.execute(actor, task, command)
    }

    /// Replaces the assignees without touching the status.
    ///
    /// # Errors
    ///
    /// See [`WorkflowEngine::execute`].
    pub fn split_task(
        &self,
        actor: &Actor,
        task: &Task,
        employees: Vec<ActorId>,
        comment: Option<&str>,
    ) -> WorkflowResult<Task> {
        let command = TaskCommand::Split {
            employees,
            comment: comment.map(str::to_owned),
        };
        self.execute(actor, task, command)
    }

    /// Current time, never earlier than the task's last mutation or its
    /// latest history entry.
    fn next_timestamp(&self, task: &Task) -> DateTime<Utc> {
        let latest = task
            .history()
            .last()
            .map_or(task.updated_at(), |entry| entry.timestamp().max(task.updated_at()));
        self.clock.utc().max(latest)
    }
}

/// Mutates the task fields touched by the command and returns the history
/// comment: the supplied one, or a generated default.
fn apply_payload(
    task: &mut Task,
    actor: &Actor,
    command: TaskCommand,
    timestamp: DateTime<Utc>,
) -> String {
    let supplied = command.supplied_comment().map(str::to_owned);
    let or_default = |default: &str| supplied.clone().unwrap_or_else(|| default.to_owned());

    match command {
        TaskCommand::Assign { employees, .. } => {
            let summary = format!("Assigned to: {}", join_ids(&employees));
            task.replace_assignees(employees);
            if let Some(first) = task.assigned_to().first().cloned() {
                task.set_current_assignee(first);
            }
            or_default(&summary)
        }
        TaskCommand::Accept { .. } => {
            task.set_current_assignee(actor.effective_id().clone());
            or_default("Task accepted")
        }
        TaskCommand::Resume { .. } => or_default("Work resumed"),
        TaskCommand::ReturnToWork { .. } => or_default("Rework done, task returned to work"),
        TaskCommand::SendToApproval { .. } => {
            or_default("Task completed and sent for approval")
        }
        TaskCommand::Approve { .. } => or_default("Task approved"),
        TaskCommand::Pause { .. }
        | TaskCommand::SendToRework { .. }
        | TaskCommand::ReturnToEmployee { .. } => supplied.clone().unwrap_or_default(),
        TaskCommand::AttachDocument { document } => {
            let summary = format!("Document: {}", document.name.trim());
            let attached = Document::new(
                task.next_document_id(),
                document.name.trim(),
                document.size_bytes,
                document.media_type,
                actor.identifier().clone(),
                timestamp,
            );
            task.push_document(attached);
            summary
        }
        TaskCommand::AddComment { text } => {
            let note = Comment::new(task.next_comment_id(), text.trim(), actor, timestamp);
            task.push_comment(note);
            text.trim().to_owned()
        }
        TaskCommand::ChangePriority { priority, .. } => {
            let summary = format!("Priority changed from {} to {priority}", task.priority());
            task.set_priority(priority);
            or_default(&summary)
        }
        TaskCommand::ChangeDeadline { due_date, .. } => {
            let summary = format!(
                "Deadline changed from {} to {due_date}",
                describe_due_date(task.due_date())
            );
            task.set_due_date(due_date);
            or_default(&summary)
        }
        TaskCommand::Split { employees, .. } => {
            let summary = format!("Task split between: {}", join_ids(&employees));
            task.replace_assignees(employees);
            or_default(&summary)
        }
    }
}
