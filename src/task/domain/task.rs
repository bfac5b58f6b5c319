//! Task aggregate root.

use super::{
    Comment, Document, HistoryEntry, Priority, TaskAction, TaskDomainError, TaskId, TaskStatus,
};
use crate::access::domain::{Actor, ActorId, Region};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task type applied when the creator does not choose one.
pub const DEFAULT_TASK_TYPE: &str = "Other";

/// Task types offered to creators. The type set is open: any string is
/// accepted and none is interpreted by the state machine.
pub const KNOWN_TASK_TYPES: [&str; 7] = [
    "Assessment",
    "Expertise",
    "Review",
    "Credit committee",
    "Reporting",
    "Memo preparation",
    DEFAULT_TASK_TYPE,
];

const CREATION_COMMENT: &str = "Task created";

/// Resolved field values for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Identifier issued by the id generator.
    pub id: TaskId,
    /// Region the task belongs to.
    pub region: Region,
    /// Categorical tag.
    pub task_type: String,
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Initial priority.
    pub priority: Priority,
    /// Initial due date.
    pub due_date: Option<NaiveDate>,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedTaskData")]
pub struct Task {
    id: TaskId,
    region: Region,
    task_type: String,
    title: String,
    description: String,
    priority: Priority,
    due_date: Option<NaiveDate>,
    status: TaskStatus,
    business_user: ActorId,
    assigned_to: Vec<ActorId>,
    current_assignee: Option<ActorId>,
    documents: Vec<Document>,
    comments: Vec<Comment>,
    history: Vec<HistoryEntry>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted region.
    pub region: Region,
    /// Persisted task type.
    pub task_type: String,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    #[serde(default)]
    pub description: String,
    /// Persisted priority.
    #[serde(default)]
    pub priority: Priority,
    /// Persisted due date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Identifier of the creating business user.
    pub business_user: ActorId,
    /// Persisted assignees.
    #[serde(default)]
    pub assigned_to: Vec<ActorId>,
    /// Persisted primary assignee.
    #[serde(default)]
    pub current_assignee: Option<ActorId>,
    /// Persisted attachments.
    #[serde(default)]
    pub documents: Vec<Document>,
    /// Persisted comments.
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Persisted audit log.
    pub history: Vec<HistoryEntry>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task in the `created` status with its creation record.
    ///
    /// Callers are responsible for checking that `author` may create tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(
        data: NewTask,
        author: &Actor,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, TaskDomainError> {
        let title = data.title.trim();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        let creation = HistoryEntry::new(
            author,
            TaskAction::Create,
            CREATION_COMMENT,
            TaskStatus::Created,
            timestamp,
        );

        Ok(Self {
            id: data.id,
            region: data.region,
            task_type: data.task_type,
            title: title.to_owned(),
            description: data.description,
            priority: data.priority,
            due_date: data.due_date,
            status: TaskStatus::Created,
            business_user: author.identifier().clone(),
            assigned_to: Vec::new(),
            current_assignee: None,
            documents: Vec::new(),
            comments: Vec::new(),
            history: vec![creation],
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the persisted aggregate violates a
    /// task invariant: missing creation record, history out of order or out
    /// of step with the status or the task timestamps, or no assignees past
    /// `created`.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, TaskDomainError> {
        if data.title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        let Some(first) = data.history.first() else {
            return Err(TaskDomainError::MissingCreationRecord(data.id));
        };
        if first.resulting_status() != TaskStatus::Created {
            return Err(TaskDomainError::MissingCreationRecord(data.id));
        }

        let in_order = data
            .history
            .windows(2)
            .all(|pair| {
                matches!(pair, [earlier, later] if earlier.timestamp() <= later.timestamp())
            });
        if !in_order {
            return Err(TaskDomainError::HistoryOutOfOrder(data.id));
        }

        let latest = data
            .history
            .last()
            .map_or(first.timestamp(), HistoryEntry::timestamp);
        if data.created_at != first.timestamp() || data.updated_at < latest {
            return Err(TaskDomainError::TimestampsOutOfStep(data.id));
        }

        let recorded = data
            .history
            .last()
            .map_or(TaskStatus::Created, HistoryEntry::resulting_status);
        if recorded != data.status {
            return Err(TaskDomainError::HistoryStatusMismatch {
                task_id: data.id,
                recorded,
                status: data.status,
            });
        }

        if data.status != TaskStatus::Created && data.assigned_to.is_empty() {
            return Err(TaskDomainError::MissingAssignees {
                task_id: data.id,
                status: data.status,
            });
        }

        Ok(Self {
            id: data.id,
            region: data.region,
            task_type: data.task_type,
            title: data.title,
            description: data.description,
            priority: data.priority,
            due_date: data.due_date,
            status: data.status,
            business_user: data.business_user,
            assigned_to: data.assigned_to,
            current_assignee: data.current_assignee,
            documents: data.documents,
            comments: data.comments,
            history: data.history,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the region.
    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.region
    }

    /// Returns the categorical task type.
    #[must_use]
    pub fn task_type(&self) -> &str {
        &self.task_type
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date, if set.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the identifier of the business user who created the task.
    #[must_use]
    pub const fn business_user(&self) -> &ActorId {
        &self.business_user
    }

    /// Returns the assigned employees.
    #[must_use]
    pub fn assigned_to(&self) -> &[ActorId] {
        &self.assigned_to
    }

    /// Returns whether the employee is among the assignees.
    #[must_use]
    pub fn is_assigned_to(&self, employee: &ActorId) -> bool {
        self.assigned_to.contains(employee)
    }

    /// Returns the primarily responsible employee, if any.
    #[must_use]
    pub const fn current_assignee(&self) -> Option<&ActorId> {
        self.current_assignee.as_ref()
    }

    /// Returns the attached documents.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Returns the comments.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Returns the audit log, oldest entry first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replays the history into the sequence of statuses the task passed
    /// through. Side mutations, which keep the status, are collapsed.
    #[must_use]
    pub fn status_trail(&self) -> Vec<TaskStatus> {
        let mut trail: Vec<TaskStatus> = Vec::with_capacity(self.history.len());
        for entry in &self.history {
            let status = entry.resulting_status();
            if trail.last() != Some(&status) {
                trail.push(status);
            }
        }
        trail
    }

    /// Replaces the assignees, dropping duplicates while keeping order.
    ///
    /// The current assignee is kept when still assigned; otherwise the first
    /// new assignee takes over.
    pub(crate) fn replace_assignees(&mut self, assignees: Vec<ActorId>) {
        let mut unique: Vec<ActorId> = Vec::with_capacity(assignees.len());
        for assignee in assignees {
            if !unique.contains(&assignee) {
                unique.push(assignee);
            }
        }
        let keep_current = self
            .current_assignee
            .as_ref()
            .is_some_and(|current| unique.contains(current));
        if !keep_current {
            self.current_assignee = unique.first().cloned();
        }
        self.assigned_to = unique;
    }

    /// Makes `employee` the primarily responsible assignee.
    pub(crate) fn set_current_assignee(&mut self, employee: ActorId) {
        self.current_assignee = Some(employee);
    }

    pub(crate) const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub(crate) const fn set_due_date(&mut self, due_date: NaiveDate) {
        self.due_date = Some(due_date);
    }

    pub(crate) fn push_document(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub(crate) fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Identifier for the next attached document.
    pub(crate) fn next_document_id(&self) -> String {
        format!("{}-D{}", self.id, self.documents.len().saturating_add(1))
    }

    /// Identifier for the next comment.
    pub(crate) fn next_comment_id(&self) -> String {
        format!("{}-C{}", self.id, self.comments.len().saturating_add(1))
    }

    /// Appends an audit entry and moves the task to the recorded status.
    pub(crate) fn record(&mut self, entry: HistoryEntry) {
        self.status = entry.resulting_status();
        self.updated_at = entry.timestamp();
        self.history.push(entry);
    }
}

impl TryFrom<PersistedTaskData> for Task {
    type Error = TaskDomainError;

    fn try_from(data: PersistedTaskData) -> Result<Self, Self::Error> {
        Self::from_persisted(data)
    }
}
