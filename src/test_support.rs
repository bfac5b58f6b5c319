//! Fixtures shared by the unit test modules.

use crate::access::domain::{Actor, ActorId};
use crate::task::domain::{Priority, Task, TaskAction, TaskId, TaskStatus};
use crate::workflow::{NewDocument, TaskCommand, TaskDraft, WorkflowEngine};
use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that starts at a fixed instant and advances one minute per read.
#[derive(Debug)]
pub(crate) struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub(crate) fn new() -> Self {
        let start = Utc
            .with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
            .single()
            .expect("fixed start instant is valid");
        Self {
            start,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::Relaxed);
        self.start + Duration::minutes(tick)
    }
}

/// Clock frozen at a single instant.
#[derive(Debug)]
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub(crate) const REGION: &str = "North";
pub(crate) const OTHER_REGION: &str = "South";

pub(crate) fn business() -> Actor {
    Actor::business("client@bank.example", REGION)
        .expect("valid business actor")
        .with_name("Client")
}

pub(crate) fn other_business() -> Actor {
    Actor::business("rival@bank.example", REGION).expect("valid business actor")
}

pub(crate) fn manager() -> Actor {
    Actor::manager("lead@bank.example", REGION)
        .expect("valid manager actor")
        .with_name("Lead")
}

pub(crate) fn foreign_manager() -> Actor {
    Actor::manager("lead@south.example", OTHER_REGION).expect("valid manager actor")
}

pub(crate) fn employee() -> Actor {
    Actor::employee("analyst@bank.example")
        .expect("valid employee actor")
        .with_name("Analyst")
}

pub(crate) fn other_employee() -> Actor {
    Actor::employee("junior@bank.example").expect("valid employee actor")
}

pub(crate) fn superuser() -> Actor {
    Actor::superuser("root@bank.example").expect("valid superuser actor")
}

/// Every actor fixture, covering each role and each ownership relation.
pub(crate) fn all_actors() -> Vec<Actor> {
    vec![
        business(),
        other_business(),
        manager(),
        foreign_manager(),
        employee(),
        other_employee(),
        superuser(),
    ]
}

pub(crate) fn actor_id(value: &str) -> ActorId {
    ActorId::new(value).expect("valid actor id")
}

pub(crate) fn engine() -> WorkflowEngine<SteppingClock> {
    WorkflowEngine::new(Arc::new(SteppingClock::new()))
}

pub(crate) fn created_task(engine: &WorkflowEngine<SteppingClock>) -> Task {
    let id = TaskId::new("T-000001").expect("valid task id");
    engine
        .create_task(&business(), id, TaskDraft::new("Collateral assessment"))
        .expect("business may create tasks")
}

/// Drives a fresh task along the shortest path to `status`, assigning it to
/// [`employee`].
pub(crate) fn task_in(engine: &WorkflowEngine<SteppingClock>, status: TaskStatus) -> Task {
    let created = created_task(engine);
    if status == TaskStatus::Created {
        return created;
    }
    let assigned = engine
        .assign_task(&manager(), &created, vec![employee().identifier().clone()], None)
        .expect("manager assigns in region");
    if status == TaskStatus::Assigned {
        return assigned;
    }
    let in_progress = engine
        .accept_task(&employee(), &assigned, None)
        .expect("assignee accepts");
    match status {
        TaskStatus::InProgress => in_progress,
        TaskStatus::Paused => engine
            .pause_task(&employee(), &in_progress, "waiting for documents")
            .expect("assignee pauses"),
        TaskStatus::Rework => engine
            .send_to_rework(&employee(), &in_progress, "missing appraisal")
            .expect("assignee sends to rework"),
        TaskStatus::Approval | TaskStatus::Approved => {
            let submitted = engine
                .send_to_approval(&employee(), &in_progress, None)
                .expect("assignee submits");
            if status == TaskStatus::Approval {
                submitted
            } else {
                engine
                    .approve_task(&manager(), &submitted, None)
                    .expect("manager approves")
            }
        }
        TaskStatus::Created | TaskStatus::Assigned => in_progress,
    }
}

/// Builds a well-formed command for `action`, with or without a comment.
pub(crate) fn command_for(action: TaskAction, with_comment: bool) -> TaskCommand {
    let comment = with_comment.then(|| "noted".to_owned());
    match action {
        TaskAction::Assign | TaskAction::Create => TaskCommand::Assign {
            employees: vec![employee().identifier().clone()],
            comment,
        },
        TaskAction::Accept => TaskCommand::Accept { comment },
        TaskAction::Pause => TaskCommand::Pause { comment },
        TaskAction::Resume => TaskCommand::Resume { comment },
        TaskAction::SendToRework => TaskCommand::SendToRework { comment },
        TaskAction::ReturnToWork => TaskCommand::ReturnToWork { comment },
        TaskAction::SendToApproval => TaskCommand::SendToApproval { comment },
        TaskAction::Approve => TaskCommand::Approve { comment },
        TaskAction::ReturnToEmployee => TaskCommand::ReturnToEmployee { comment },
        TaskAction::AttachDocument => TaskCommand::AttachDocument {
            document: NewDocument::new("scan.pdf", 10),
        },
        TaskAction::AddComment => TaskCommand::AddComment {
            text: comment.unwrap_or_default(),
        },
        TaskAction::ChangePriority => TaskCommand::ChangePriority {
            priority: Priority::High,
            comment,
        },
        TaskAction::ChangeDeadline => TaskCommand::ChangeDeadline {
            due_date: NaiveDate::from_ymd_opt(2024, 6, 30).expect("valid date"),
            comment,
        },
        TaskAction::Split => TaskCommand::Split {
            employees: vec![
                other_employee().identifier().clone(),
                actor_id("intern@bank.example"),
            ],
            comment,
        },
    }
}
