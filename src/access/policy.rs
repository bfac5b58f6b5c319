//! Authorization predicates combining role capabilities with task ownership.
//!
//! Every function here is pure: it reads the actor and task it is given and
//! never mutates or retains them.

use super::domain::{Actor, Capability, Role};
use crate::task::domain::{Task, TaskAction, TaskFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task-specific relationship an action demands of its actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipRequirement {
    /// Actor region equals task region. Superusers always pass.
    SameRegion,
    /// Actor's effective identifier is among the assignees.
    AssignedEmployee,
    /// Actor created the task.
    TaskOwner,
    /// Actor can see the task.
    Visible,
    /// Actor can edit the task fields.
    Editable,
}

impl OwnershipRequirement {
    /// Returns a stable name for the requirement.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SameRegion => "same_region",
            Self::AssignedEmployee => "assigned_employee",
            Self::TaskOwner => "task_owner",
            Self::Visible => "visible",
            Self::Editable => "editable",
        }
    }
}

impl fmt::Display for OwnershipRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns whether the actor's role holds the capability.
#[must_use]
pub fn has_capability(actor: &Actor, capability: Capability) -> bool {
    actor.can(capability)
}

/// Looks a capability up by name. Unknown names are never granted.
#[must_use]
pub fn has_capability_named(actor: &Actor, name: &str) -> bool {
    Capability::from_str(name).is_ok_and(|capability| actor.can(capability))
}

/// Returns whether the actor may see the task.
///
/// This predicate is the basis of every listing and runs before any other
/// filter.
#[must_use]
pub fn can_view(actor: &Actor, task: &Task) -> bool {
    match actor.role() {
        Role::Superuser => true,
        Role::Business => task.business_user() == actor.identifier(),
        Role::Manager => actor.region() == Some(task.region()),
        Role::Employee => task.is_assigned_to(actor.effective_id()),
    }
}

/// Returns whether the actor may edit task fields such as priority and due
/// date. Always a subset of [`can_view`].
#[must_use]
pub fn can_edit(actor: &Actor, task: &Task) -> bool {
    match actor.role() {
        Role::Superuser => true,
        Role::Business | Role::Manager => {
            can_view(actor, task) && actor.can(Capability::EditOwnTasks)
        }
        Role::Employee => false,
    }
}

/// Capability that unlocks the action.
#[must_use]
pub const fn primary_capability(action: TaskAction) -> Capability {
    match action {
        TaskAction::Create => Capability::CreateTask,
        TaskAction::Assign => Capability::AssignTasks,
        TaskAction::Accept => Capability::AcceptTask,
        TaskAction::Pause | TaskAction::Resume => Capability::PauseTask,
        TaskAction::SendToRework => Capability::SendToRework,
        TaskAction::ReturnToWork => Capability::ReturnToWork,
        TaskAction::SendToApproval => Capability::SendToApproval,
        TaskAction::Approve => Capability::ApproveTask,
        TaskAction::ReturnToEmployee => Capability::ReturnTask,
        TaskAction::AttachDocument => Capability::AddDocuments,
        TaskAction::AddComment => Capability::AddComments,
        TaskAction::ChangePriority => Capability::ChangePriority,
        TaskAction::ChangeDeadline => Capability::ChangeDeadline,
        TaskAction::Split => Capability::SplitTask,
    }
}

/// Second capability that also unlocks the action, if any.
///
/// Authors attach documents with `addDocuments`; assignees attach working
/// files with `attachFiles`.
#[must_use]
pub const fn alternate_capability(action: TaskAction) -> Option<Capability> {
    match action {
        TaskAction::AttachDocument => Some(Capability::AttachFiles),
        _ => None,
    }
}

/// Returns whether the actor holds a capability unlocking the action.
#[must_use]
pub fn can_invoke(actor: &Actor, action: TaskAction) -> bool {
    actor.can(primary_capability(action))
        || alternate_capability(action).is_some_and(|capability| actor.can(capability))
}

/// Returns the ownership predicate layered on top of the action's
/// capability, if any.
#[must_use]
pub const fn ownership_requirement(action: TaskAction) -> Option<OwnershipRequirement> {
    match action {
        TaskAction::Assign | TaskAction::Approve => Some(OwnershipRequirement::SameRegion),
        TaskAction::Accept
        | TaskAction::Pause
        | TaskAction::Resume
        | TaskAction::SendToRework
        | TaskAction::SendToApproval => Some(OwnershipRequirement::AssignedEmployee),
        TaskAction::ReturnToWork => Some(OwnershipRequirement::TaskOwner),
        TaskAction::AttachDocument | TaskAction::AddComment | TaskAction::Split => {
            Some(OwnershipRequirement::Visible)
        }
        TaskAction::ChangePriority | TaskAction::ChangeDeadline => {
            Some(OwnershipRequirement::Editable)
        }
        TaskAction::Create | TaskAction::ReturnToEmployee => None,
    }
}

/// Evaluates an ownership requirement for the actor on the task.
#[must_use]
pub fn satisfies(actor: &Actor, task: &Task, requirement: OwnershipRequirement) -> bool {
    match requirement {
        OwnershipRequirement::SameRegion => {
            actor.role() == Role::Superuser || actor.region() == Some(task.region())
        }
        OwnershipRequirement::AssignedEmployee => task.is_assigned_to(actor.effective_id()),
        OwnershipRequirement::TaskOwner => task.business_user() == actor.identifier(),
        OwnershipRequirement::Visible => can_view(actor, task),
        OwnershipRequirement::Editable => can_edit(actor, task),
    }
}

/// Returns the actions the actor may invoke on the task right now.
///
/// An action is available when the actor holds its capability, the action
/// is a legal edge from the current status (or a side mutation on a
/// non-terminal task), and its ownership predicate holds. Comment
/// requirements are not considered.
#[must_use]
pub fn available_actions(actor: &Actor, task: &Task) -> Vec<TaskAction> {
    TaskAction::ALL
        .into_iter()
        .filter(|action| can_invoke(actor, *action))
        .filter(|action| action.target_status(task.status()).is_some())
        .filter(|action| {
            ownership_requirement(*action)
                .is_none_or(|requirement| satisfies(actor, task, requirement))
        })
        .collect()
}

/// Returns the tasks the actor may see that also pass `filter`.
///
/// Visibility is applied before every other filter.
pub fn visible_tasks<'a, I>(actor: &Actor, tasks: I, filter: &TaskFilter) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .filter(|task| can_view(actor, task))
        .filter(|task| filter.matches(task))
        .collect()
}
