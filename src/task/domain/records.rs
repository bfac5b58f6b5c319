//! Append-only records carried by a task: history, documents, comments.

use super::{TaskAction, TaskStatus};
use crate::access::domain::{Actor, ActorId, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One audit log entry.
///
/// Every action applied to a task appends exactly one entry whose
/// `resulting_status` is the task status after the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    timestamp: DateTime<Utc>,
    actor_id: ActorId,
    actor_name: String,
    actor_role: Role,
    action: TaskAction,
    label: String,
    comment: String,
    resulting_status: TaskStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    assigned_to: Vec<ActorId>,
}

impl HistoryEntry {
    /// Creates an entry attributed to `actor`.
    #[must_use]
    pub fn new(
        actor: &Actor,
        action: TaskAction,
        comment: impl Into<String>,
        resulting_status: TaskStatus,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            actor_id: actor.identifier().clone(),
            actor_name: actor.name().to_owned(),
            actor_role: actor.role(),
            action,
            label: action.label().to_owned(),
            comment: comment.into(),
            resulting_status,
            assigned_to: Vec::new(),
        }
    }

    /// Records the assignee set produced by the action.
    #[must_use]
    pub fn with_assignees(mut self, assignees: &[ActorId]) -> Self {
        self.assigned_to = assignees.to_vec();
        self
    }

    /// Returns when the action happened.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the acting identifier.
    #[must_use]
    pub const fn actor_id(&self) -> &ActorId {
        &self.actor_id
    }

    /// Returns the actor display name.
    #[must_use]
    pub fn actor_name(&self) -> &str {
        &self.actor_name
    }

    /// Returns the actor role.
    #[must_use]
    pub const fn actor_role(&self) -> Role {
        self.actor_role
    }

    /// Returns the recorded action.
    #[must_use]
    pub const fn action(&self) -> TaskAction {
        self.action
    }

    /// Returns the human-readable action label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the supplied or generated comment.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the task status after the action.
    #[must_use]
    pub const fn resulting_status(&self) -> TaskStatus {
        self.resulting_status
    }

    /// Returns the assignees recorded by assign and split actions.
    #[must_use]
    pub fn assigned_to(&self) -> &[ActorId] {
        &self.assigned_to
    }
}

/// Attachment descriptor. Documents are never removed from a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    id: String,
    name: String,
    size_bytes: u64,
    #[serde(default)]
    media_type: Option<String>,
    uploaded_by: ActorId,
    uploaded_at: DateTime<Utc>,
}

impl Document {
    /// Creates a document descriptor.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        size_bytes: u64,
        media_type: Option<String>,
        uploaded_by: ActorId,
        uploaded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size_bytes,
            media_type,
            uploaded_by,
            uploaded_at,
        }
    }

    /// Returns the document identifier, unique within its task.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the file name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the size in bytes.
    #[must_use]
    pub const fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Returns the media type, if known.
    #[must_use]
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Returns who uploaded the document.
    #[must_use]
    pub const fn uploaded_by(&self) -> &ActorId {
        &self.uploaded_by
    }

    /// Returns when the document was uploaded.
    #[must_use]
    pub const fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }
}

/// Free-text note left on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: String,
    text: String,
    author: ActorId,
    author_role: Role,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a comment.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        author: &Actor,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            author: author.identifier().clone(),
            author_role: author.role(),
            created_at,
        }
    }

    /// Returns the comment identifier, unique within its task.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the comment text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the author identifier.
    #[must_use]
    pub const fn author(&self) -> &ActorId {
        &self.author
    }

    /// Returns the author role.
    #[must_use]
    pub const fn author_role(&self) -> Role {
        self.author_role
    }

    /// Returns when the comment was written.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
