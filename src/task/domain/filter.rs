//! Listing filters applied after visibility checks.

use super::{Priority, Task, TaskStatus};
use crate::access::domain::Region;

/// Field filters for task listings. Unset fields match every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    search: Option<String>,
    region: Option<Region>,
    task_type: Option<String>,
    status: Option<TaskStatus>,
    priority: Option<Priority>,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches tasks whose id, title, or current assignee contains `text`,
    /// ignoring case. Blank text is ignored.
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        let raw = text.into();
        let needle = raw.trim().to_lowercase();
        self.search = (!needle.is_empty()).then_some(needle);
        self
    }

    /// Matches tasks in the region.
    #[must_use]
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Matches tasks of the type.
    #[must_use]
    pub fn with_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = Some(task_type.into());
        self
    }

    /// Matches tasks in the status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Matches tasks with the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns whether the task passes every configured filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task)
            && self.region.as_ref().is_none_or(|region| task.region() == region)
            && self
                .task_type
                .as_deref()
                .is_none_or(|task_type| task.task_type() == task_type)
            && self.status.is_none_or(|status| task.status() == status)
            && self.priority.is_none_or(|priority| task.priority() == priority)
    }

    fn matches_search(&self, task: &Task) -> bool {
        let Some(needle) = self.search.as_deref() else {
            return true;
        };
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
        contains(task.id().as_str())
            || contains(task.title())
            || task
                .current_assignee()
                .is_some_and(|assignee| contains(assignee.as_str()))
    }
}
