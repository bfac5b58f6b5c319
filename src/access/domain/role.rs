//! Closed set of actor roles and their static permission sets.

use super::{Capability, ParseRoleError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const BUSINESS_PERMISSIONS: &[Capability] = &[
    Capability::CreateTask,
    Capability::ViewOwnTasks,
    Capability::EditOwnTasks,
    Capability::AddDocuments,
    Capability::ReturnToWork,
    Capability::ChangePriority,
    Capability::ChangeDeadline,
];

const MANAGER_PERMISSIONS: &[Capability] = &[
    Capability::CreateTask,
    Capability::ViewOwnTasks,
    Capability::ViewRegionTasks,
    Capability::EditOwnTasks,
    Capability::AssignTasks,
    Capability::ApproveTask,
    Capability::ReturnTask,
    Capability::ManageEmployees,
    Capability::ViewAnalytics,
    Capability::SplitTask,
    Capability::ChangePriority,
    Capability::ChangeDeadline,
    Capability::AddComments,
];

const EMPLOYEE_PERMISSIONS: &[Capability] = &[
    Capability::ViewAssignedTasks,
    Capability::ViewOwnTasks,
    Capability::AcceptTask,
    Capability::PauseTask,
    Capability::SendToRework,
    Capability::SendToApproval,
    Capability::AttachFiles,
    Capability::AddComments,
];

const SUPERUSER_PERMISSIONS: &[Capability] = &[
    Capability::CreateTask,
    Capability::ViewAllTasks,
    Capability::ViewAllAnalytics,
    Capability::ManageUsers,
    Capability::ManageRegions,
    Capability::ExportData,
    Capability::ViewKpi,
    Capability::AssignTasks,
    Capability::ApproveTask,
];

/// Role of an actor invoking the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Business user who authors tasks and handles rework.
    Business,
    /// Regional manager who distributes and approves tasks.
    Manager,
    /// Employee who performs assigned work.
    Employee,
    /// System-wide administrator.
    Superuser,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Self; 4] = [Self::Business, Self::Manager, Self::Employee, Self::Superuser];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Manager => "manager",
            Self::Employee => "employee",
            Self::Superuser => "superuser",
        }
    }

    /// Returns the static permission set of the role.
    #[must_use]
    pub const fn permissions(self) -> &'static [Capability] {
        match self {
            Self::Business => BUSINESS_PERMISSIONS,
            Self::Manager => MANAGER_PERMISSIONS,
            Self::Employee => EMPLOYEE_PERMISSIONS,
            Self::Superuser => SUPERUSER_PERMISSIONS,
        }
    }

    /// Returns whether the role holds the capability.
    #[must_use]
    pub fn has(self, capability: Capability) -> bool {
        self.permissions().contains(&capability)
    }

    /// Returns whether actors with this role must belong to a region.
    #[must_use]
    pub const fn requires_region(self) -> bool {
        matches!(self, Self::Business | Self::Manager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "business" => Ok(Self::Business),
            "manager" => Ok(Self::Manager),
            "employee" => Ok(Self::Employee),
            "superuser" => Ok(Self::Superuser),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}
