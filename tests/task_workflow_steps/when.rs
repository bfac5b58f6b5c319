//! When steps for task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use rstest_bdd_macros::when;
use zadachnik::access::domain::ActorId;
use zadachnik::task::domain::TaskAction;
use zadachnik::workflow::TaskCommand;

fn transition_command(
    action: TaskAction,
    comment: Option<String>,
) -> Result<TaskCommand, eyre::Report> {
    let command = match action {
        TaskAction::Accept => TaskCommand::Accept { comment },
        TaskAction::Pause => TaskCommand::Pause { comment },
        TaskAction::Resume => TaskCommand::Resume { comment },
        TaskAction::SendToRework => TaskCommand::SendToRework { comment },
        TaskAction::ReturnToWork => TaskCommand::ReturnToWork { comment },
        TaskAction::SendToApproval => TaskCommand::SendToApproval { comment },
        TaskAction::Approve => TaskCommand::Approve { comment },
        TaskAction::ReturnToEmployee => TaskCommand::ReturnToEmployee { comment },
        other => return Err(eyre::eyre!("step does not support action '{other}'")),
    };
    Ok(command)
}

fn perform(
    world: &mut TaskWorkflowWorld,
    actor: &str,
    action: &str,
    comment: Option<String>,
) -> Result<(), eyre::Report> {
    let acting = world.actor(actor)?;
    let parsed: TaskAction = action
        .parse()
        .map_err(|err| eyre::eyre!("invalid action in scenario: {err}"))?;
    let command = transition_command(parsed, comment)?;
    let task_id = world.task()?.id().clone();

    let result = run_async(world.service.apply(&acting, &task_id, command));
    world.record(result);
    Ok(())
}

#[when(r#""{actor}" assigns the task to "{employee}""#)]
fn assign_task(
    world: &mut TaskWorkflowWorld,
    actor: String,
    employee: String,
) -> Result<(), eyre::Report> {
    let acting = world.actor(&actor)?;
    let employees = vec![ActorId::new(employee)?];
    let task_id = world.task()?.id().clone();

    let result = run_async(world.service.apply(
        &acting,
        &task_id,
        TaskCommand::Assign {
            employees,
            comment: None,
        },
    ));
    world.record(result);
    Ok(())
}

#[when(r#""{actor}" performs "{action}" without a comment"#)]
fn perform_without_comment(
    world: &mut TaskWorkflowWorld,
    actor: String,
    action: String,
) -> Result<(), eyre::Report> {
    perform(world, &actor, &action, None)
}

#[when(r#""{actor}" performs "{action}" with comment "{comment}""#)]
fn perform_with_comment(
    world: &mut TaskWorkflowWorld,
    actor: String,
    action: String,
    comment: String,
) -> Result<(), eyre::Report> {
    perform(world, &actor, &action, Some(comment))
}
