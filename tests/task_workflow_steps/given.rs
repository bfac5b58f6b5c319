//! Given steps for task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use zadachnik::access::domain::Actor;
use zadachnik::workflow::TaskDraft;

fn register(world: &mut TaskWorkflowWorld, actor: Actor) {
    world
        .actors
        .insert(actor.identifier().as_str().to_owned(), actor);
}

#[given(r#"a business user "{identifier}" in region "{region}""#)]
fn business_user(
    world: &mut TaskWorkflowWorld,
    identifier: String,
    region: String,
) -> Result<(), eyre::Report> {
    let actor = Actor::business(identifier, region).wrap_err("build business actor")?;
    register(world, actor);
    Ok(())
}

#[given(r#"a manager "{identifier}" in region "{region}""#)]
fn manager(
    world: &mut TaskWorkflowWorld,
    identifier: String,
    region: String,
) -> Result<(), eyre::Report> {
    let actor = Actor::manager(identifier, region).wrap_err("build manager actor")?;
    register(world, actor);
    Ok(())
}

#[given(r#"an employee "{identifier}""#)]
fn employee(world: &mut TaskWorkflowWorld, identifier: String) -> Result<(), eyre::Report> {
    let actor = Actor::employee(identifier).wrap_err("build employee actor")?;
    register(world, actor);
    Ok(())
}

#[given(r#""{author}" has created a task titled "{title}""#)]
fn task_created(
    world: &mut TaskWorkflowWorld,
    author: String,
    title: String,
) -> Result<(), eyre::Report> {
    let actor = world.actor(&author)?;
    let created = run_async(world.service.create(&actor, TaskDraft::new(title)))
        .wrap_err("create task for workflow scenario")?;
    world.task = Some(created);
    Ok(())
}
