//! Named permission flags held by roles.

use super::ParseCapabilityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single permission flag.
///
/// Capabilities are flat: holding one never implies holding another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    /// Create new tasks.
    CreateTask,
    /// See tasks the actor created.
    ViewOwnTasks,
    /// See every task in the actor's region.
    ViewRegionTasks,
    /// See tasks assigned to the actor.
    ViewAssignedTasks,
    /// See every task.
    ViewAllTasks,
    /// Edit fields of owned or regional tasks.
    EditOwnTasks,
    /// Attach documents as the task author.
    AddDocuments,
    /// Attach working files as an assignee.
    AttachFiles,
    /// Return a task from rework back into progress.
    ReturnToWork,
    /// Change task priority.
    ChangePriority,
    /// Change task due date.
    ChangeDeadline,
    /// Distribute tasks to employees.
    AssignTasks,
    /// Approve completed tasks.
    ApproveTask,
    /// Return a task under approval to its employees.
    ReturnTask,
    /// Re-distribute a task between several employees.
    SplitTask,
    /// Add free-text comments.
    AddComments,
    /// Accept an assigned task into progress.
    AcceptTask,
    /// Pause and resume work on a task.
    PauseTask,
    /// Send a task back to its author for rework.
    SendToRework,
    /// Submit finished work for approval.
    SendToApproval,
    /// Manage the employees of a region.
    ManageEmployees,
    /// View regional analytics.
    ViewAnalytics,
    /// View analytics across all regions.
    ViewAllAnalytics,
    /// Manage user accounts.
    ManageUsers,
    /// Manage the list of regions.
    ManageRegions,
    /// Export the task set.
    ExportData,
    /// View key performance indicators.
    #[serde(rename = "viewKPI")]
    ViewKpi,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Self; 27] = [
        Self::CreateTask,
        Self::ViewOwnTasks,
        Self::ViewRegionTasks,
        Self::ViewAssignedTasks,
        Self::ViewAllTasks,
        Self::EditOwnTasks,
        Self::AddDocuments,
        Self::AttachFiles,
        Self::ReturnToWork,
        Self::ChangePriority,
        Self::ChangeDeadline,
        Self::AssignTasks,
        Self::ApproveTask,
        Self::ReturnTask,
        Self::SplitTask,
        Self::AddComments,
        Self::AcceptTask,
        Self::PauseTask,
        Self::SendToRework,
        Self::SendToApproval,
        Self::ManageEmployees,
        Self::ViewAnalytics,
        Self::ViewAllAnalytics,
        Self::ManageUsers,
        Self::ManageRegions,
        Self::ExportData,
        Self::ViewKpi,
    ];

    /// Returns the canonical capability name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateTask => "createTask",
            Self::ViewOwnTasks => "viewOwnTasks",
            Self::ViewRegionTasks => "viewRegionTasks",
            Self::ViewAssignedTasks => "viewAssignedTasks",
            Self::ViewAllTasks => "viewAllTasks",
            Self::EditOwnTasks => "editOwnTasks",
            Self::AddDocuments => "addDocuments",
            Self::AttachFiles => "attachFiles",
            Self::ReturnToWork => "returnToWork",
            Self::ChangePriority => "changePriority",
            Self::ChangeDeadline => "changeDeadline",
            Self::AssignTasks => "assignTasks",
            Self::ApproveTask => "approveTask",
            Self::ReturnTask => "returnTask",
            Self::SplitTask => "splitTask",
            Self::AddComments => "addComments",
            Self::AcceptTask => "acceptTask",
            Self::PauseTask => "pauseTask",
            Self::SendToRework => "sendToRework",
            Self::SendToApproval => "sendToApproval",
            Self::ManageEmployees => "manageEmployees",
            Self::ViewAnalytics => "viewAnalytics",
            Self::ViewAllAnalytics => "viewAllAnalytics",
            Self::ManageUsers => "manageUsers",
            Self::ManageRegions => "manageRegions",
            Self::ExportData => "exportData",
            Self::ViewKpi => "viewKPI",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = ParseCapabilityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|capability| capability.as_str() == trimmed)
            .ok_or_else(|| ParseCapabilityError(value.to_owned()))
    }
}
