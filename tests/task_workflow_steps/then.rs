//! Then steps for task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use rstest_bdd_macros::then;
use zadachnik::task::domain::TaskStatus;
use zadachnik::workflow::RejectionKind;

fn parse_kind(raw: &str) -> Result<RejectionKind, eyre::Report> {
    let kind = match raw {
        "permission_denied" => RejectionKind::PermissionDenied,
        "illegal_transition" => RejectionKind::IllegalTransition,
        "ownership_violation" => RejectionKind::OwnershipViolation,
        "comment_required" => RejectionKind::CommentRequired,
        "task_not_found" => RejectionKind::TaskNotFound,
        "actor_invalid" => RejectionKind::ActorInvalid,
        "invalid_input" => RejectionKind::InvalidInput,
        other => return Err(eyre::eyre!("unknown rejection kind in scenario: {other}")),
    };
    Ok(kind)
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskWorkflowWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.task()?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then("the task history has {count:usize} entries")]
fn history_length(world: &TaskWorkflowWorld, count: usize) -> Result<(), eyre::Report> {
    let recorded = world.task()?.history().len();
    eyre::ensure!(recorded == count, "expected {count} history entries, found {recorded}");
    Ok(())
}

#[then(r#"the status trail is "{trail}""#)]
fn status_trail_is(world: &TaskWorkflowWorld, trail: String) -> Result<(), eyre::Report> {
    let actual: Vec<String> = world
        .task()?
        .status_trail()
        .into_iter()
        .map(|status| status.as_str().to_owned())
        .collect();
    let expected: Vec<String> = trail.split(',').map(|part| part.trim().to_owned()).collect();

    eyre::ensure!(actual == expected, "expected trail {expected:?}, found {actual:?}");
    Ok(())
}

#[then(r#"the last action is rejected as "{kind}""#)]
fn last_action_rejected(world: &TaskWorkflowWorld, kind: String) -> Result<(), eyre::Report> {
    let expected = parse_kind(&kind)?;
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing action result"))?;

    let actual = result.as_ref().err().and_then(|err| err.rejection_kind());
    if actual != Some(expected) {
        return Err(eyre::eyre!("expected {expected:?} rejection, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the last history comment is "{comment}""#)]
fn last_history_comment(world: &TaskWorkflowWorld, comment: String) -> Result<(), eyre::Report> {
    let last = world
        .task()?
        .history()
        .last()
        .ok_or_else(|| eyre::eyre!("task has no history"))?;

    eyre::ensure!(
        last.comment() == comment,
        "expected comment {comment:?}, found {:?}",
        last.comment()
    );
    Ok(())
}

#[then(r#""{actor}" can see the task"#)]
fn actor_can_see(world: &TaskWorkflowWorld, actor: String) -> Result<(), eyre::Report> {
    let acting = world.actor(&actor)?;
    let task_id = world.task()?.id().clone();

    run_async(world.service.find_visible(&acting, &task_id))
        .map_err(|err| eyre::eyre!("{actor} cannot see the task: {err}"))?;
    Ok(())
}

#[then(r#""{actor}" cannot see the task"#)]
fn actor_cannot_see(world: &TaskWorkflowWorld, actor: String) -> Result<(), eyre::Report> {
    let acting = world.actor(&actor)?;
    let task_id = world.task()?.id().clone();

    let result = run_async(world.service.find_visible(&acting, &task_id));
    let kind = result.as_ref().err().and_then(|err| err.rejection_kind());
    eyre::ensure!(
        kind == Some(RejectionKind::TaskNotFound),
        "{actor} unexpectedly saw the task: {result:?}"
    );
    Ok(())
}
