//! Action payloads accepted by the workflow engine.

use crate::access::domain::{ActorId, Region};
use crate::task::domain::{Priority, TaskAction};
use chrono::NaiveDate;

/// Creator-supplied fields for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) task_type: Option<String>,
    pub(crate) priority: Priority,
    pub(crate) due_date: Option<NaiveDate>,
    pub(crate) region: Option<Region>,
}

impl TaskDraft {
    /// Creates a draft with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            task_type: None,
            priority: Priority::default(),
            due_date: None,
            region: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the task type.
    #[must_use]
    pub fn with_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = Some(task_type.into());
        self
    }

    /// Sets the initial priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Places the task in a region other than the creator's own.
    ///
    /// Required when the creator has no region.
    #[must_use]
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }
}

/// Attachment metadata supplied by the uploader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    /// File name.
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Media type, if known.
    pub media_type: Option<String>,
}

impl NewDocument {
    /// Creates attachment metadata without a media type.
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            media_type: None,
        }
    }

    /// Sets the media type.
    #[must_use]
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }
}

/// A requested action together with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    /// Distribute a created task; replaces the assignees wholesale.
    Assign {
        /// New assignees; the first becomes the current assignee.
        employees: Vec<ActorId>,
        /// Optional note.
        comment: Option<String>,
    },
    /// Take an assigned task into progress.
    Accept {
        /// Optional note.
        comment: Option<String>,
    },
    /// Pause work in progress.
    Pause {
        /// Mandatory reason.
        comment: Option<String>,
    },
    /// Resume paused work.
    Resume {
        /// Optional note.
        comment: Option<String>,
    },
    /// Send the task back to its author.
    SendToRework {
        /// Mandatory reason.
        comment: Option<String>,
    },
    /// Return a reworked task to the employees.
    ReturnToWork {
        /// Optional note.
        comment: Option<String>,
    },
    /// Submit finished work for approval.
    SendToApproval {
        /// Optional note.
        comment: Option<String>,
    },
    /// Approve finished work.
    Approve {
        /// Optional note.
        comment: Option<String>,
    },
    /// Reject submitted work back to the employees.
    ReturnToEmployee {
        /// Mandatory reason.
        comment: Option<String>,
    },
    /// Attach a document.
    AttachDocument {
        /// Attachment metadata.
        document: NewDocument,
    },
    /// Add a free-text comment.
    AddComment {
        /// Comment text; must not be blank.
        text: String,
    },
    /// Change the priority.
    ChangePriority {
        /// New priority.
        priority: Priority,
        /// Optional note.
        comment: Option<String>,
    },
    /// Change the due date.
    ChangeDeadline {
        /// New due date.
        due_date: NaiveDate,
        /// Optional note.
        comment: Option<String>,
    },
    /// Replace the assignees without touching the status.
    Split {
        /// New assignees.
        employees: Vec<ActorId>,
        /// Optional note.
        comment: Option<String>,
    },
}

impl TaskCommand {
    /// Returns the action identifier of the command.
    #[must_use]
    pub const fn action(&self) -> TaskAction {
        match self {
            Self::Assign { .. } => TaskAction::Assign,
            Self::Accept { .. } => TaskAction::Accept,
            Self::Pause { .. } => TaskAction::Pause,
            Self::Resume { .. } => TaskAction::Resume,
            Self::SendToRework { .. } => TaskAction::SendToRework,
            Self::ReturnToWork { .. } => TaskAction::ReturnToWork,
            Self::SendToApproval { .. } => TaskAction::SendToApproval,
            Self::Approve { .. } => TaskAction::Approve,
            Self::ReturnToEmployee { .. } => TaskAction::ReturnToEmployee,
            Self::AttachDocument { .. } => TaskAction::AttachDocument,
            Self::AddComment { .. } => TaskAction::AddComment,
            Self::ChangePriority { .. } => TaskAction::ChangePriority,
            Self::ChangeDeadline { .. } => TaskAction::ChangeDeadline,
            Self::Split { .. } => TaskAction::Split,
        }
    }

    /// Returns the user-supplied comment, trimmed, when it is not blank.
    ///
    /// For [`TaskCommand::AddComment`] this is the comment text itself.
    #[must_use]
    pub fn supplied_comment(&self) -> Option<&str> {
        let raw = match self {
            Self::Assign { comment, .. }
            | Self::Accept { comment }
            | Self::Pause { comment }
            | Self::Resume { comment }
            | Self::SendToRework { comment }
            | Self::ReturnToWork { comment }
            | Self::SendToApproval { comment }
            | Self::Approve { comment }
            | Self::ReturnToEmployee { comment }
            | Self::ChangePriority { comment, .. }
            | Self::ChangeDeadline { comment, .. }
            | Self::Split { comment, .. } => comment.as_deref(),
            Self::AddComment { text } => Some(text.as_str()),
            Self::AttachDocument { .. } => None,
        };
        raw.map(str::trim).filter(|text| !text.is_empty())
    }
}
